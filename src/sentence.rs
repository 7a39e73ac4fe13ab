//! Sentence boundary detection.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of sentences.
///
/// Detectors return raw segments; trimming and empty filtering happen in the
/// sentence splitter.
pub trait SentenceDetector: Send + Sync {
    /// Segment `text` into sentences, in order.
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// Default detector backed by Unicode sentence boundaries (UAX #29).
pub struct UnicodeSentenceDetector;

impl SentenceDetector for UnicodeSentenceDetector {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences().map(str::to_string).collect()
    }
}

/// Punctuation-based detector with configurable terminators.
///
/// A terminator only ends a sentence when followed by whitespace or the end
/// of input, so decimals and version numbers like "3.14" stay intact.
pub struct PunctuationDetector {
    terminators: Vec<char>,
}

impl PunctuationDetector {
    /// Create a detector with the default terminators (`.`, `!`, `?`).
    pub fn new() -> Self {
        Self {
            terminators: vec!['.', '!', '?'],
        }
    }

    /// Create a detector with custom terminators.
    pub fn with_terminators(terminators: Vec<char>) -> Self {
        Self { terminators }
    }
}

impl Default for PunctuationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceDetector for PunctuationDetector {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            if self.terminators.contains(&c)
                && chars.peek().map_or(true, |next| next.is_whitespace())
            {
                sentences.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            sentences.push(current);
        }

        sentences
    }
}
