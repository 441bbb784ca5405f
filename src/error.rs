use crate::metaphone::EncodingError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    EncodingError(#[from] EncodingError),
}
