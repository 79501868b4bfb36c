use std::fmt::Display;

/// One timestamped transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    timestamp: String,
    text: String,
}

impl TranscriptLine {
    pub(crate) fn new(timestamp: &str, text: String) -> Self {
        TranscriptLine {
            timestamp: timestamp.to_string(),
            text,
        }
    }

    /// The wall-clock time-of-day stamp the line was recorded with.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The line text without the timestamp prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the line the way the console displays it.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.timestamp, self.text)
    }
}

impl Display for TranscriptLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// The append-only console transcript.
///
/// Every executed command appends exactly two lines in chronological order:
/// the echoed input and the outcome, both carrying the same timestamp. The
/// core enforces no maximum length; capping or clearing is the embedding
/// layer's concern, served by [clear](Transcript::clear).
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Appends the echo/outcome line pair for one execution.
    pub(crate) fn record(&mut self, timestamp: &str, echo: String, outcome: String) {
        self.lines.push(TranscriptLine::new(timestamp, echo));
        self.lines.push(TranscriptLine::new(timestamp, outcome));
    }

    /// Returns all lines in chronological order.
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Renders all lines the way the console displays them.
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(TranscriptLine::render).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_line_pair() {
        let mut transcript = Transcript::new();
        transcript.record(
            "14:30:15",
            "> find()".to_string(),
            "Found 2 documents".to_string(),
        );

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines()[0].render(), "[14:30:15] > find()");
        assert_eq!(transcript.lines()[1].render(), "[14:30:15] Found 2 documents");
    }

    #[test]
    fn test_line_pair_shares_timestamp() {
        let mut transcript = Transcript::new();
        transcript.record("09:00:01", "> count()".to_string(), "Count: 0".to_string());
        assert_eq!(
            transcript.lines()[0].timestamp(),
            transcript.lines()[1].timestamp()
        );
    }

    #[test]
    fn test_append_only_ordering() {
        let mut transcript = Transcript::new();
        transcript.record("09:00:01", "> first".to_string(), "Count: 0".to_string());
        transcript.record("09:00:02", "> second".to_string(), "Count: 1".to_string());

        let rendered = transcript.rendered();
        assert_eq!(rendered.len(), 4);
        assert!(rendered[0].contains("first"));
        assert!(rendered[2].contains("second"));
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new();
        transcript.record("09:00:01", "> x".to_string(), "Count: 0".to_string());
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
