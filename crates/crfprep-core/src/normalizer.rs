//! # Raw `token\pos` to CoNLL Normalization
//!
//! Converts corpora stored one sentence per line as whitespace-separated
//! `token\pos` units into the two-column CoNLL text read by
//! [`crate::extractor`]. A line is converted whole or not at all.

use crate::types::{Diagnostic, NormalizationReport};

/// Separator between the token and its tag inside one raw unit.
pub const UNIT_DELIMITER: char = '\\';

/// A `token\pos` unit split into its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedUnit<'a> {
    pub token: &'a str,
    pub pos: &'a str,
}

impl<'a> TaggedUnit<'a> {
    /// Split a unit on [`UNIT_DELIMITER`]; `None` unless there are exactly two parts.
    pub fn parse(unit: &'a str) -> Option<Self> {
        let mut parts = unit.split(UNIT_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(token), Some(pos), None) => Some(Self { token, pos }),
            _ => None,
        }
    }
}

/// Normalized CoNLL text plus what happened while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalization {
    pub text: String,
    pub report: NormalizationReport,
}

/// Line-oriented `token\pos` to `token<TAB>pos` converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConllNormalizer;

impl RawConllNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Split one raw line into its units.
    ///
    /// `physical_line` is only used to label the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::MalformedUnit`] naming the first unit that does
    /// not split into exactly two parts. No unit of the line is kept.
    pub fn normalize_line<'a>(
        &self,
        physical_line: usize,
        line: &'a str,
    ) -> Result<Vec<TaggedUnit<'a>>, Diagnostic> {
        let line = line.trim();
        line.split_whitespace()
            .map(|unit| {
                TaggedUnit::parse(unit).ok_or_else(|| Diagnostic::MalformedUnit {
                    physical_line,
                    line: line.to_string(),
                    unit: unit.to_string(),
                })
            })
            .collect()
    }

    /// Normalize a whole raw text.
    ///
    /// Every valid non-blank line becomes one sentence block of
    /// `token<TAB>pos` lines followed by a blank line. Blank lines are
    /// ignored; diagnostics carry 1-based physical line numbers.
    ///
    /// # Examples
    /// ```
    /// use crfprep_core::RawConllNormalizer;
    ///
    /// let normalization = RawConllNormalizer::new().normalize("He\\PRP likes\\VBZ\n");
    /// assert_eq!(normalization.text, "He\tPRP\nlikes\tVBZ\n\n");
    /// ```
    pub fn normalize(&self, text: &str) -> Normalization {
        let mut normalization = Normalization::default();
        let report = &mut normalization.report;

        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            report.lines += 1;

            match self.normalize_line(idx + 1, raw) {
                Ok(units) => {
                    for unit in &units {
                        normalization.text.push_str(unit.token);
                        normalization.text.push('\t');
                        normalization.text.push_str(unit.pos);
                        normalization.text.push('\n');
                    }
                    normalization.text.push('\n');
                    report.sentences += 1;
                    report.tokens += units.len();
                }
                Err(diagnostic) => {
                    report.dropped_lines += 1;
                    report.diagnostics.push(diagnostic);
                }
            }
        }

        tracing::debug!(
            lines = report.lines,
            sentences = report.sentences,
            dropped = report.dropped_lines,
            "normalized raw text"
        );
        normalization
    }
}
