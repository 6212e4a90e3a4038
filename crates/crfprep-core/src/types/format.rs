use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CrfPrepError;

/// Annotation encoding of a feature-extraction input corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// One token per line, tag in the last column, blank line between sentences.
    #[default]
    Conll,
    /// `<Sentence id="N">` ... `</Sentence>` blocks of `index<TAB>token<TAB>tag` lines.
    Ssf,
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conll => write!(f, "conll"),
            Self::Ssf => write!(f, "ssf"),
        }
    }
}

impl FromStr for CorpusFormat {
    type Err = CrfPrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conll" => Ok(Self::Conll),
            "ssf" => Ok(Self::Ssf),
            _ => Err(CrfPrepError::UnknownFormat { name: s.to_string() }),
        }
    }
}
