use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::CorpusFormat;

/// A recoverable corpus-quality problem found while processing a corpus.
///
/// Diagnostics never abort a run: the offending line is skipped and
/// processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A `token\pos` unit in a raw line did not split into exactly two parts.
    /// The whole source line was dropped.
    MalformedUnit {
        /// 1-based physical line number in the source text.
        physical_line: usize,
        /// The full (trimmed) source line.
        line: String,
        /// The unit that failed to split.
        unit: String,
    },

    /// A feature-input line did not decode into a token/tag record.
    /// Only that line was skipped.
    MalformedRecord {
        format: CorpusFormat,
        /// 1-based sentence number within the corpus text.
        sentence: usize,
        /// The offending line.
        line: String,
        /// Human-readable decode failure.
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedUnit {
                physical_line,
                line,
                unit,
            } => write!(
                f,
                "line {physical_line}: malformed token unit '{unit}' in '{line}', line dropped"
            ),
            Self::MalformedRecord {
                format,
                sentence,
                line,
                reason,
            } => write!(
                f,
                "{format} sentence {sentence}: skipped line '{line}': {reason}"
            ),
        }
    }
}

/// Counters and diagnostics for one feature-extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Sentences produced by segmentation.
    pub sentences: usize,
    /// Sentences that contributed a block to the output.
    pub sentences_emitted: usize,
    /// Feature lines written.
    pub tokens: usize,
    /// Lines skipped because they did not decode.
    pub skipped_lines: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractionReport {
    /// Fold another pass (e.g. the next file of a directory) into this one.
    pub fn merge(&mut self, other: ExtractionReport) {
        self.merge_counts(&other);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Add another pass's counters, leaving diagnostics untouched.
    pub fn merge_counts(&mut self, other: &ExtractionReport) {
        self.sentences += other.sentences;
        self.sentences_emitted += other.sentences_emitted;
        self.tokens += other.tokens;
        self.skipped_lines += other.skipped_lines;
    }

    /// Sentences that reduced to zero usable tokens.
    pub fn sentences_dropped(&self) -> usize {
        self.sentences - self.sentences_emitted
    }
}

/// Counters and diagnostics for one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Non-blank source lines seen.
    pub lines: usize,
    /// Sentence blocks written.
    pub sentences: usize,
    /// `token<TAB>pos` lines written.
    pub tokens: usize,
    /// Source lines dropped because one of their units was malformed.
    pub dropped_lines: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl NormalizationReport {
    pub fn merge(&mut self, other: NormalizationReport) {
        self.merge_counts(&other);
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn merge_counts(&mut self, other: &NormalizationReport) {
        self.lines += other.lines;
        self.sentences += other.sentences;
        self.tokens += other.tokens;
        self.dropped_lines += other.dropped_lines;
    }
}
