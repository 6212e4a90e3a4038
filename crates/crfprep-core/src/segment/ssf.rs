use regex::Regex;

use super::Sentence;
use crate::error::Result;

/// Matches one bracketed SSF sentence, capturing its interior lazily so that
/// each opening tag pairs with the next closing tag.
const SENTENCE_PATTERN: &str = r"(?s)<Sentence id=[^>]*>\n?(.*?)\n?</Sentence>";

/// Bracket-pattern sentence segmentation for SSF corpora.
#[derive(Debug, Clone)]
pub struct SsfSegmenter {
    re_sentence: Regex,
}

impl SsfSegmenter {
    /// # Errors
    ///
    /// Returns `CrfPrepError::RegexError` if the sentence pattern fails to
    /// compile (should never happen with the static pattern).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_sentence: Regex::new(SENTENCE_PATTERN)?,
        })
    }

    /// Capture every bracketed sentence in document order.
    ///
    /// Text outside brackets, an opening tag without a closing tag, and
    /// brackets enclosing only blank lines produce no sentence.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut blank = 0usize;

        for captures in self.re_sentence.captures_iter(text) {
            let Some(interior) = captures.get(1) else {
                continue;
            };
            let sentence = Sentence::new(interior.as_str());
            if sentence.lines().next().is_none() {
                blank += 1;
                continue;
            }
            sentences.push(sentence);
        }

        if blank > 0 {
            tracing::debug!(blank, "ignored ssf brackets without token lines");
        }
        tracing::debug!(sentences = sentences.len(), "segmented ssf text");
        sentences
    }
}
