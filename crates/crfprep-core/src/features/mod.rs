//! # Per-token Feature Derivation
//!
//! A token's feature tuple is fixed: the token itself, prefixes of length
//! 1 to [`PREFIX_COUNT`], suffixes of length 1 to [`SUFFIX_COUNT`], a
//! [`LengthClass`] marker and the normalized tag. Column order defines the
//! training file contract and must not change.

pub mod affix;
pub mod token;

pub use affix::{affix, AffixSide, NULL_AFFIX};
pub use token::{featurize, normalize_tag, LengthClass, TokenFeatures};

/// Number of prefix columns (lengths `1..=PREFIX_COUNT`).
pub const PREFIX_COUNT: usize = 4;

/// Number of suffix columns (lengths `1..=SUFFIX_COUNT`).
pub const SUFFIX_COUNT: usize = 7;

/// Tokens of at most this many characters are [`LengthClass::Less`].
pub const LENGTH_THRESHOLD: usize = 4;

/// Tab-separated columns in one feature line.
pub const FEATURE_COLUMNS: usize = 1 + PREFIX_COUNT + SUFFIX_COUNT + 2;
