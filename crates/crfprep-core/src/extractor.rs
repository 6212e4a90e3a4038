//! # Corpus Feature Extraction
//!
//! Turns a CoNLL or SSF corpus into CRF training text: one feature line per
//! token, one blank line after every sentence. Lines that do not decode into
//! a token/tag record are skipped and reported, never fatal.

use crate::error::{RecordError, Result};
use crate::features::featurize;
use crate::segment::{Segmenter, Sentence};
use crate::types::{ConllRecord, CorpusFormat, Diagnostic, ExtractionReport, SsfRecord, TokenTag};

/// Configuration for the feature extractor.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Annotation encoding of the input corpus.
    pub format: CorpusFormat,
}

impl ExtractorConfig {
    /// Create a new configuration with default settings (CoNLL input).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corpus format.
    pub fn with_format(mut self, format: CorpusFormat) -> Self {
        self.format = format;
        self
    }
}

/// Feature text for one corpus plus what happened while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Training-file text in document order.
    pub text: String,
    pub report: ExtractionReport,
}

/// Segments a corpus and featurizes every decodable token line.
#[derive(Debug, Clone)]
pub struct CorpusFeatureExtractor {
    config: ExtractorConfig,
    segmenter: Segmenter,
}

impl CorpusFeatureExtractor {
    /// # Errors
    ///
    /// Returns `CrfPrepError::RegexError` if the SSF segmenter cannot be built.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let segmenter = Segmenter::for_format(config.format)?;
        Ok(Self { config, segmenter })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Produce the feature-file text for a whole corpus.
    ///
    /// # Examples
    /// ```
    /// use crfprep_core::{CorpusFeatureExtractor, CorpusFormat, ExtractorConfig};
    ///
    /// let extractor =
    ///     CorpusFeatureExtractor::new(ExtractorConfig::new().with_format(CorpusFormat::Conll))
    ///         .unwrap();
    /// let extraction = extractor.extract("I\tPRP\n\n\n");
    ///
    /// assert!(extraction.text.starts_with("I\tI\tNULL"));
    /// assert!(extraction.text.ends_with("\tLESS\tPRP\n\n"));
    /// assert_eq!(extraction.report.tokens, 1);
    /// ```
    pub fn extract(&self, text: &str) -> Extraction {
        let sentences = self.segmenter.segment(text);
        self.extract_sentences(&sentences)
    }

    /// Featurize already-segmented sentences.
    ///
    /// Sentences whose every line is malformed contribute nothing, not even
    /// a separator line.
    pub fn extract_sentences(&self, sentences: &[Sentence<'_>]) -> Extraction {
        let format = self.segmenter.format();
        let mut extraction = Extraction::default();
        let report = &mut extraction.report;
        report.sentences = sentences.len();

        let mut block = String::new();
        for (idx, sentence) in sentences.iter().enumerate() {
            block.clear();
            let mut tokens = 0usize;

            for line in sentence.lines() {
                match write_features(format, line, &mut block) {
                    Ok(()) => tokens += 1,
                    Err(err) => {
                        report.skipped_lines += 1;
                        report.diagnostics.push(Diagnostic::MalformedRecord {
                            format,
                            sentence: idx + 1,
                            line: line.to_string(),
                            reason: err.to_string(),
                        });
                    }
                }
            }

            if tokens == 0 {
                continue;
            }
            extraction.text.push_str(&block);
            extraction.text.push('\n');
            report.sentences_emitted += 1;
            report.tokens += tokens;
        }

        tracing::debug!(
            %format,
            sentences = report.sentences,
            emitted = report.sentences_emitted,
            tokens = report.tokens,
            skipped = report.skipped_lines,
            "extracted features"
        );
        extraction
    }
}

/// Decode one line with the field rule of `format` and append its feature line.
fn write_features(
    format: CorpusFormat,
    line: &str,
    out: &mut String,
) -> std::result::Result<(), RecordError> {
    match format {
        CorpusFormat::Conll => write_record(&ConllRecord::parse(line)?, out),
        CorpusFormat::Ssf => write_record(&SsfRecord::parse(line)?, out),
    }
    Ok(())
}

fn write_record(record: &impl TokenTag, out: &mut String) {
    featurize(record.token(), record.tag()).write_line(out);
}
