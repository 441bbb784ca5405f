//! Code-set comparison helpers layered on top of the encoder. Two
//! words are considered phonetic matches when any pairing of their
//! candidate codes agrees; this is what makes "Smith" and "Schmidt"
//! find each other through the shared alternate `XMT`.
use crate::metaphone::encode;

use itertools::Itertools;

/// True when the two words share at least one candidate code.
///
/// Words without any code (no letters at all) never match anything,
/// not even each other.
///
/// Example:
///
/// ```
/// use twinphone::matching::sounds_like;
///
/// assert!(sounds_like("Smith", "Schmidt"));
/// assert!(!sounds_like("Smith", "Jones"));
/// ```
pub fn sounds_like(a: &str, b: &str) -> bool {
    shared_code(a, b).is_some()
}

/// The first code the two words have in common, if any. Pairings are
/// tried in primary/primary, primary/secondary, secondary/primary,
/// secondary/secondary order, so ties resolve towards the most likely
/// pronunciations.
pub fn shared_code(a: &str, b: &str) -> Option<String> {
    let (left, right) = (encode(a), encode(b));

    let result = left
        .candidates()
        .cartesian_product(right.candidates())
        .find(|(first, second)| first == second)
        .map(|(code, _)| code.to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sounds_like_shared_alternate() {
        assert!(sounds_like("Smith", "Schmidt"));
        assert!(sounds_like("Snider", "Schneider"));
        assert!(sounds_like("Catherine", "Katherine"));
    }

    #[test]
    fn test_sounds_like_one_sided_divergence() {
        assert!(sounds_like("Wasserman", "Vasserman"));
        assert!(sounds_like("Arnow", "Arnoff"));
    }

    #[test]
    fn test_sounds_like_rejects_unrelated_words() {
        assert!(!sounds_like("John", "Mary"));
        assert!(!sounds_like("Smith", "Jones"));
    }

    #[test]
    fn test_empty_words_never_match() {
        assert!(!sounds_like("", ""));
        assert!(!sounds_like("", "Smith"));
        assert!(!sounds_like("123", "123"));
    }

    #[test]
    fn test_shared_code_pairing_order() {
        assert_eq!(shared_code("Smith", "Schmidt"), Some("XMT".to_string()));
        assert_eq!(shared_code("Smith", "Smith"), Some("SM0".to_string()));
        assert_eq!(shared_code("Smith", "Jones"), None);
    }
}
