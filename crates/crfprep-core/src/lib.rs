//! # crfprep Core
//!
//! Prepares POS-annotated corpora for CRF tagger training. Two pipelines:
//!
//! - [`RawConllNormalizer`] turns `token\pos` lines into two-column CoNLL text.
//! - [`CorpusFeatureExtractor`] reads CoNLL or SSF corpora and writes one
//!   fixed affix feature line per token.
//!
//! Both work on in-memory text and report recoverable annotation problems as
//! [`Diagnostic`] values instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use crfprep_core::{CorpusFeatureExtractor, CorpusFormat, ExtractorConfig};
//!
//! let extractor =
//!     CorpusFeatureExtractor::new(ExtractorConfig::new().with_format(CorpusFormat::Ssf)).unwrap();
//! let extraction = extractor.extract("<Sentence id=\"1\">\n1\tHe\tPRP\n2\truns\tVBZ\n</Sentence>");
//!
//! assert_eq!(extraction.report.tokens, 2);
//! assert!(extraction.text.ends_with("\tVBZ\n\n"));
//! ```
pub mod error;
pub mod extractor;
pub mod features;
pub mod normalizer;
pub mod segment;
pub mod types;

// Re-export primary API
pub use error::{CrfPrepError, RecordError, Result};
pub use extractor::{CorpusFeatureExtractor, Extraction, ExtractorConfig};
pub use features::{affix, featurize, normalize_tag, AffixSide, LengthClass, TokenFeatures};
pub use normalizer::{Normalization, RawConllNormalizer, TaggedUnit};
pub use segment::{ConllSegmenter, Segmenter, Sentence, SsfSegmenter};
pub use types::{
    ConllRecord, CorpusFormat, Diagnostic, ExtractionReport, NormalizationReport, SsfRecord,
    TokenTag,
};
