//! # Sentence Segmentation
//!
//! Splits a raw corpus into sentences. The strategy is chosen once per
//! corpus from its [`CorpusFormat`]:
//!
//! - [`ConllSegmenter`]: runs of non-blank lines separated by blank lines.
//! - [`SsfSegmenter`]: interiors of `<Sentence id=...>` ... `</Sentence>` brackets.

pub mod conll;
pub mod ssf;

use std::borrow::Cow;

pub use conll::ConllSegmenter;
pub use ssf::SsfSegmenter;

use crate::error::Result;
use crate::types::CorpusFormat;

/// One sentence of annotated lines, in document order.
///
/// Segmenters never produce a sentence without at least one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    text: Cow<'a, str>,
}

impl<'a> Sentence<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }

    /// The sentence text as captured, lines joined by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-blank lines with trailing whitespace removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
    }
}

/// Segmentation strategy for one corpus format.
#[derive(Debug, Clone)]
pub enum Segmenter {
    Conll(ConllSegmenter),
    Ssf(SsfSegmenter),
}

impl Segmenter {
    /// Build the segmenter matching `format`.
    ///
    /// # Errors
    ///
    /// Returns `CrfPrepError::RegexError` if the SSF bracket pattern fails to
    /// compile (should never happen with the static pattern).
    pub fn for_format(format: CorpusFormat) -> Result<Self> {
        Ok(match format {
            CorpusFormat::Conll => Self::Conll(ConllSegmenter::new()),
            CorpusFormat::Ssf => Self::Ssf(SsfSegmenter::new()?),
        })
    }

    pub fn format(&self) -> CorpusFormat {
        match self {
            Self::Conll(_) => CorpusFormat::Conll,
            Self::Ssf(_) => CorpusFormat::Ssf,
        }
    }

    /// Split `text` into sentences in document order.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        match self {
            Self::Conll(segmenter) => segmenter.segment(text),
            Self::Ssf(segmenter) => segmenter.segment(text),
        }
    }
}
