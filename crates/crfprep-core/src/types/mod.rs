pub mod diagnostic;
pub mod format;
pub mod record;

pub use diagnostic::{Diagnostic, ExtractionReport, NormalizationReport};
pub use format::CorpusFormat;
pub use record::{ConllRecord, SsfRecord, TokenTag};
