use super::Sentence;

/// Blank-line sentence segmentation for CoNLL-style corpora.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConllSegmenter;

impl ConllSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Segment a whole corpus text.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        self.segment_lines(text.lines())
    }

    /// Segment pre-split lines.
    ///
    /// Lines are stripped of surrounding whitespace. Each run of non-blank
    /// lines becomes one sentence; any number of blank lines ends a run and
    /// never yields an empty sentence. A run still open at end of input is
    /// flushed as the final sentence.
    pub fn segment_lines<'a, I>(&self, lines: I) -> Vec<Sentence<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sentences = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                if !buffer.is_empty() {
                    sentences.push(Sentence::new(buffer.join("\n")));
                    buffer.clear();
                }
                continue;
            }
            buffer.push(line);
        }

        if !buffer.is_empty() {
            sentences.push(Sentence::new(buffer.join("\n")));
        }

        tracing::debug!(sentences = sentences.len(), "segmented conll text");
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence<'_>]) -> Vec<String> {
        sentences.iter().map(|s| s.text().to_string()).collect()
    }

    #[test]
    fn blank_lines_split_sentences() {
        let text = "He\tPRP\nruns\tVBZ\n\nI\tPRP\n";
        let sentences = ConllSegmenter::new().segment(text);
        assert_eq!(texts(&sentences), vec!["He\tPRP\nruns\tVBZ", "I\tPRP"]);
    }

    #[test]
    fn blank_runs_collapse() {
        let text = "\n\n  \nHe\tPRP\n\n\n\t\nI\tPRP\n\n\n";
        let sentences = ConllSegmenter::new().segment(text);
        assert_eq!(texts(&sentences), vec!["He\tPRP", "I\tPRP"]);
    }

    #[test]
    fn trailing_buffer_is_flushed() {
        let sentences = ConllSegmenter::new().segment("a\tDT\nb\tNN");
        assert_eq!(texts(&sentences), vec!["a\tDT\nb\tNN"]);
    }

    #[test]
    fn lines_are_stripped() {
        let lines = ["  He\tPRP \r", "runs\tVBZ\r", "\r"];
        let sentences = ConllSegmenter::new().segment_lines(lines);
        assert_eq!(texts(&sentences), vec!["He\tPRP\nruns\tVBZ"]);
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(ConllSegmenter::new().segment("").is_empty());
        assert!(ConllSegmenter::new().segment("\n \n\t\n").is_empty());
    }

    #[test]
    fn resegmenting_joined_output_is_stable() {
        let text = "a\tDT\nb\tNN\n\n\n\nc\tVB\n\n";
        let segmenter = ConllSegmenter::new();
        let first = segmenter.segment(text);
        let rejoined = texts(&first).join("\n\n");
        let second = segmenter.segment(&rejoined);
        assert_eq!(first, second);
        assert_eq!(rejoined, "a\tDT\nb\tNN\n\nc\tVB");
    }
}
