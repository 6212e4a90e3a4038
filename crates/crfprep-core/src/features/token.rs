use std::fmt;

use super::affix::{affix, AffixSide};
use super::{LENGTH_THRESHOLD, PREFIX_COUNT, SUFFIX_COUNT};

/// Coarse token length marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthClass {
    /// At most [`LENGTH_THRESHOLD`] characters.
    Less,
    /// More than [`LENGTH_THRESHOLD`] characters.
    More,
}

impl LengthClass {
    pub fn of(token: &str) -> Self {
        if token.chars().count() <= LENGTH_THRESHOLD {
            Self::Less
        } else {
            Self::More
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Less => "LESS",
            Self::More => "MORE",
        }
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite a tag so it cannot clash with the feature file's own
/// delimiters: every `-` becomes `_` and runs of `_` collapse to one.
///
/// The result is a fixed point: normalizing twice changes nothing.
pub fn normalize_tag(tag: &str) -> String {
    let mut normalized = String::with_capacity(tag.len());
    for c in tag.chars() {
        let c = if c == '-' { '_' } else { c };
        if c == '_' && normalized.ends_with('_') {
            continue;
        }
        normalized.push(c);
    }
    normalized
}

/// The full feature tuple of one token, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFeatures<'a> {
    pub token: &'a str,
    pub prefixes: [&'a str; PREFIX_COUNT],
    pub suffixes: [&'a str; SUFFIX_COUNT],
    pub length_class: LengthClass,
    pub tag: String,
}

impl TokenFeatures<'_> {
    /// Append this tuple as one tab-separated, newline-terminated line.
    pub fn write_line(&self, out: &mut String) {
        out.push_str(self.token);
        for value in self.prefixes.iter().chain(self.suffixes.iter()) {
            out.push('\t');
            out.push_str(value);
        }
        out.push('\t');
        out.push_str(self.length_class.as_str());
        out.push('\t');
        out.push_str(&self.tag);
        out.push('\n');
    }
}

impl fmt::Display for TokenFeatures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)?;
        for value in self.prefixes.iter().chain(self.suffixes.iter()) {
            write!(f, "\t{value}")?;
        }
        write!(f, "\t{}\t{}", self.length_class, self.tag)
    }
}

/// Derive the feature tuple for a token/tag pair.
///
/// # Examples
/// ```
/// use crfprep_core::features::featurize;
///
/// let features = featurize("I", "PRP");
/// assert_eq!(
///     features.to_string(),
///     "I\tI\tNULL\tNULL\tNULL\tI\tNULL\tNULL\tNULL\tNULL\tNULL\tNULL\tLESS\tPRP"
/// );
/// ```
pub fn featurize<'a>(token: &'a str, tag: &str) -> TokenFeatures<'a> {
    TokenFeatures {
        token,
        prefixes: std::array::from_fn(|i| affix(token, i + 1, AffixSide::Prefix)),
        suffixes: std::array::from_fn(|i| affix(token, i + 1, AffixSide::Suffix)),
        length_class: LengthClass::of(token),
        tag: normalize_tag(tag),
    }
}
