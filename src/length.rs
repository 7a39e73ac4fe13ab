//! Pluggable length measurement.

use std::sync::Arc;

use crate::tokenizer::{TiktokenTokenizer, Tokenizer};

/// Measures the size of a text string in the configured unit.
///
/// The chunk assembler does not care which unit is used, only that smaller
/// text usually measures smaller. Pathological non-monotone measurers are the
/// caller's problem.
pub trait LengthFn: Send + Sync {
    /// Measured length of `text`.
    fn measure(&self, text: &str) -> usize;
}

/// Default measurer: token count under a tokenizer codec.
pub struct TokenLength {
    tokenizer: Arc<dyn Tokenizer>,
}

impl TokenLength {
    /// Create a measurer backed by the shared tiktoken tokenizer.
    pub fn new() -> Self {
        Self {
            tokenizer: TiktokenTokenizer::shared(),
        }
    }

    /// Create a measurer backed by a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl Default for TokenLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LengthFn for TokenLength {
    fn measure(&self, text: &str) -> usize {
        self.tokenizer.count(text)
    }
}

/// Character-count measurer, for callers that do not need token fidelity.
pub struct CharLength;

impl LengthFn for CharLength {
    fn measure(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Adapter turning a plain function or closure into a [`LengthFn`].
pub struct FnLength<F>(pub F);

impl<F> LengthFn for FnLength<F>
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn measure(&self, text: &str) -> usize {
        (self.0)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_length_counts_chars() {
        assert_eq!(CharLength.measure("hello"), 5);
        assert_eq!(CharLength.measure(""), 0);
        // chars, not bytes
        assert_eq!(CharLength.measure("héllo"), 5);
    }

    #[test]
    fn test_fn_length_adapter() {
        let byte_len = FnLength(|text: &str| text.len());
        assert_eq!(byte_len.measure("abc"), 3);
    }

    #[test]
    fn test_token_length_empty() {
        assert_eq!(TokenLength::new().measure(""), 0);
    }
}
