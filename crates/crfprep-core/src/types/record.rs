//! # Per-format Token Records
//!
//! Each annotated line of a feature-extraction corpus is decoded into a
//! named-field record before featurization. Decoding names exactly which
//! positions are required and fails with a [`RecordError`] instead of
//! indexing past the end of the line.

use crate::error::RecordError;

/// Common view over the decoded records of every corpus format.
pub trait TokenTag {
    /// The surface token.
    fn token(&self) -> &str;
    /// The raw (not yet normalized) tag.
    fn tag(&self) -> &str;
}

/// A CoNLL line: token in the first column, tag in the last.
///
/// Any columns in between are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConllRecord<'a> {
    pub token: &'a str,
    pub tag: &'a str,
}

impl<'a> ConllRecord<'a> {
    /// Minimum number of tab-separated fields.
    pub const MIN_FIELDS: usize = 2;

    /// Decode one stripped CoNLL line.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TooFewFields`] when the line has a single
    /// column, and [`RecordError::EmptyField`] when the token or tag is empty.
    pub fn parse(line: &'a str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < Self::MIN_FIELDS {
            return Err(RecordError::TooFewFields {
                expected: Self::MIN_FIELDS,
                found: fields.len(),
            });
        }

        let last = fields.len() - 1;
        let token = required(fields[0], "token", 0)?;
        let tag = required(fields[last], "tag", last)?;
        Ok(Self { token, tag })
    }
}

impl TokenTag for ConllRecord<'_> {
    fn token(&self) -> &str {
        self.token
    }

    fn tag(&self) -> &str {
        self.tag
    }
}

/// An SSF token line: `index<TAB>token<TAB>tag[<TAB>features...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsfRecord<'a> {
    pub index: &'a str,
    pub token: &'a str,
    pub tag: &'a str,
}

impl<'a> SsfRecord<'a> {
    /// Minimum number of tab-separated fields.
    pub const MIN_FIELDS: usize = 3;

    /// Decode one SSF line from inside a sentence bracket.
    ///
    /// The index column is kept verbatim; chunk-closing lines such as
    /// `\t))` have too few fields and are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TooFewFields`] or [`RecordError::EmptyField`].
    pub fn parse(line: &'a str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < Self::MIN_FIELDS {
            return Err(RecordError::TooFewFields {
                expected: Self::MIN_FIELDS,
                found: fields.len(),
            });
        }

        Ok(Self {
            index: fields[0],
            token: required(fields[1], "token", 1)?,
            tag: required(fields[2], "tag", 2)?,
        })
    }
}

impl TokenTag for SsfRecord<'_> {
    fn token(&self) -> &str {
        self.token
    }

    fn tag(&self) -> &str {
        self.tag
    }
}

fn required<'a>(
    value: &'a str,
    field: &'static str,
    position: usize,
) -> Result<&'a str, RecordError> {
    if value.is_empty() {
        Err(RecordError::EmptyField { field, position })
    } else {
        Ok(value)
    }
}
