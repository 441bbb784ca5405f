//! Twinphone is a Double Metaphone phonetic encoding library
//! for fuzzy name and word matching.
//!
//! The library maps a word to two intentionally approximate
//! pronunciation codes: a primary code and, wherever the spelling
//! admits more than one plausible pronunciation, a diverging
//! secondary code. Encoding "Smith" yields `SM0` and `XMT`, while
//! "Schmidt" yields `XMT` and `SMT`; the shared `XMT` is what lets
//! the two names match phonetically.
//!
//! The two primary structs to look into are [Word](./metaphone/struct.Word.html)
//! and [`Encoding`](./metaphone/struct.Encoding.html).
//!
//! Additionally the module documentation for [encoding](./metaphone/index.html)
//! and [matching](./matching/index.html) provides more
//! granular details on how each module may be used independently.
//!
//! ### Example
//!
//! ```
//! use twinphone::metaphone::encode;
//!
//! let encoding = encode("Smith");
//!
//! assert_eq!(encoding.primary, "SM0");
//! assert_eq!(encoding.secondary, "XMT");
//! assert!(encoding.is_ambiguous());
//! ```

#![deny(
    future_incompatible,
    nonstandard_style,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![deny(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::decimal_literal_representation,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::explicit_into_iter_loop,
    clippy::explicit_iter_loop,
    clippy::expl_impl_clone_on_copy,
    clippy::fallible_impl_from,
    clippy::manual_filter_map,
    clippy::filter_map_next,
    clippy::manual_find_map,
    clippy::float_arithmetic,
    clippy::get_unwrap,
    clippy::if_not_else,
    clippy::inline_always,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::map_flatten,
    clippy::match_same_arms,
    clippy::maybe_infinite_iter,
    clippy::mem_forget,
    clippy::module_name_repetitions,
    clippy::multiple_inherent_impl,
    clippy::mut_mut,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::map_unwrap_or,
    clippy::path_buf_push_overwrite,
    clippy::print_stdout,
    clippy::redundant_closure_for_method_calls,
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::single_match_else,
    clippy::string_add,
    clippy::string_add_assign,
    clippy::type_repetition_in_bounds,
    clippy::unicode_not_nfc,
    clippy::unseparated_literal_suffix,
    clippy::used_underscore_binding,
    clippy::wildcard_dependencies
)]
#![recursion_limit = "128"]

#[macro_use]
extern crate lazy_static;

pub mod constants;
pub mod error;
pub mod matching;
pub mod metaphone;
