//! Fixed-length character affixes taken from either end of a token.
//!
//! Lengths count Unicode scalar values, not bytes, so affixes of
//! non-ASCII tokens never split a character.

/// Marker emitted when a token is shorter than the requested affix length.
pub const NULL_AFFIX: &str = "NULL";

/// Which end of the token an affix is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixSide {
    Prefix,
    Suffix,
}

/// Returns the first or last `length` characters of `token`, or
/// [`NULL_AFFIX`] when the token has fewer than `length` characters.
///
/// # Examples
/// ```
/// use crfprep_core::features::{affix, AffixSide, NULL_AFFIX};
///
/// assert_eq!(affix("running", 3, AffixSide::Prefix), "run");
/// assert_eq!(affix("running", 3, AffixSide::Suffix), "ing");
/// assert_eq!(affix("I", 2, AffixSide::Suffix), NULL_AFFIX);
/// ```
pub fn affix(token: &str, length: usize, side: AffixSide) -> &str {
    let char_count = token.chars().count();
    if char_count < length {
        return NULL_AFFIX;
    }

    match side {
        AffixSide::Prefix => &token[..byte_offset(token, length)],
        AffixSide::Suffix => &token[byte_offset(token, char_count - length)..],
    }
}

/// Byte offset of the `nth` character, or the end of the string.
fn byte_offset(token: &str, nth: usize) -> usize {
    token
        .char_indices()
        .nth(nth)
        .map_or(token.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_suffix_of_long_token() {
        assert_eq!(affix("running", 1, AffixSide::Prefix), "r");
        assert_eq!(affix("running", 4, AffixSide::Prefix), "runn");
        assert_eq!(affix("running", 1, AffixSide::Suffix), "g");
        assert_eq!(affix("running", 7, AffixSide::Suffix), "running");
    }

    #[test]
    fn short_token_yields_null_on_both_sides() {
        for length in 2..=7 {
            assert_eq!(affix("I", length, AffixSide::Prefix), NULL_AFFIX);
            assert_eq!(affix("I", length, AffixSide::Suffix), NULL_AFFIX);
        }
        assert_eq!(affix("", 1, AffixSide::Prefix), NULL_AFFIX);
    }

    #[test]
    fn exact_length_returns_whole_token() {
        assert_eq!(affix("he", 2, AffixSide::Prefix), "he");
        assert_eq!(affix("he", 2, AffixSide::Suffix), "he");
    }

    #[test]
    fn affix_length_holds_for_every_requested_length() {
        let tokens = ["a", "ab", "mangoes", "unbelievable", "ok"];
        for token in tokens {
            let char_count = token.chars().count();
            for length in 1..=8 {
                let prefix = affix(token, length, AffixSide::Prefix);
                let suffix = affix(token, length, AffixSide::Suffix);
                if char_count < length {
                    assert_eq!(prefix, NULL_AFFIX);
                    assert_eq!(suffix, NULL_AFFIX);
                } else {
                    assert_eq!(prefix.chars().count(), length);
                    assert_eq!(suffix.chars().count(), length);
                    assert!(token.starts_with(prefix));
                    assert!(token.ends_with(suffix));
                }
            }
        }
    }

    #[test]
    fn multibyte_tokens_slice_on_characters() {
        // Five scalar values, fifteen bytes.
        let token = "पढ़ना";
        assert_eq!(token.chars().count(), 5);
        assert_eq!(affix(token, 2, AffixSide::Prefix), "पढ");
        assert_eq!(affix(token, 2, AffixSide::Suffix), "ना");
        assert_eq!(affix(token, 6, AffixSide::Suffix), NULL_AFFIX);
    }
}
