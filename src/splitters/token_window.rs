//! Token-window splitting strategy.

use std::sync::Arc;

use crate::error::{Result, SplitError};
use crate::splitters::TextSplitter;
use crate::tokenizer::{TiktokenTokenizer, Tokenizer};
use crate::types::{SplitConfig, SplitOptions};

/// Produces overlapping fixed-size windows over the token representation.
///
/// The whole text is encoded once; windows of at most `chunk_size` tokens are
/// decoded back to text, with consecutive windows sharing `overlap` tokens of
/// context. This strategy always windows, regardless of the `chunk` flag, and
/// bypasses the chunk assembler entirely.
pub struct TokenWindowSplitter {
    config: SplitConfig,
    tokenizer: Arc<dyn Tokenizer>,
}

impl TokenWindowSplitter {
    /// Create a splitter with the default configuration and the shared
    /// tiktoken tokenizer.
    pub fn new() -> Self {
        Self {
            config: SplitConfig::default(),
            tokenizer: TiktokenTokenizer::shared(),
        }
    }

    /// Create a splitter with an explicit configuration.
    pub fn with_config(config: SplitConfig) -> Self {
        Self {
            config,
            tokenizer: TiktokenTokenizer::shared(),
        }
    }

    /// Replace the tokenizer codec.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

impl Default for TokenWindowSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSplitter for TokenWindowSplitter {
    fn config(&self) -> &SplitConfig {
        &self.config
    }

    fn split_text_with(&self, text: &str, opts: &SplitOptions) -> Result<Vec<String>> {
        let config = self.config.resolve(opts)?;

        // A window that advances by chunk_size - overlap <= 0 tokens would
        // never terminate; reject it before doing any work.
        if config.overlap() >= config.chunk_size() {
            return Err(SplitError::DegenerateWindow {
                chunk_size: config.chunk_size(),
                overlap: config.overlap(),
            });
        }

        let tokens = self.tokenizer.encode(text);
        if tokens.is_empty() {
            return Ok(vec![]);
        }

        let step = config.chunk_size() - config.overlap();
        let mut windows = Vec::new();
        let mut start = 0;

        while start < tokens.len() {
            let end = (start + config.chunk_size()).min(tokens.len());
            let window = self.tokenizer.decode(&tokens[start..end]);
            let window = window.trim();
            if !window.is_empty() {
                windows.push(window.to_string());
            }
            start += step;
        }

        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::count_tokens;

    /// One token per character; deterministic windows for tests.
    struct CharTokenizer;

    impl Tokenizer for CharTokenizer {
        fn encode(&self, text: &str) -> Vec<usize> {
            text.chars().map(|c| c as usize).collect()
        }

        fn decode(&self, tokens: &[usize]) -> String {
            tokens
                .iter()
                .filter_map(|&t| char::from_u32(t as u32))
                .collect()
        }
    }

    fn char_splitter(chunk_size: usize, overlap: usize) -> TokenWindowSplitter {
        TokenWindowSplitter::with_config(SplitConfig::new(chunk_size, overlap).unwrap())
            .with_tokenizer(Arc::new(CharTokenizer))
    }

    #[test]
    fn test_windows_advance_by_size_minus_overlap() {
        let splitter = char_splitter(4, 1);
        let windows = splitter.split_text("abcdefghij").unwrap();
        assert_eq!(windows, vec!["abcd", "defg", "ghij", "j"]);
    }

    #[test]
    fn test_consecutive_windows_share_overlap() {
        let splitter = char_splitter(4, 2);
        let windows = splitter.split_text("abcdefgh").unwrap();
        assert_eq!(windows, vec!["abcd", "cdef", "efgh", "gh"]);
        for pair in windows.windows(2) {
            if pair[0].len() == 4 {
                assert_eq!(&pair[0][pair[0].len() - 2..], &pair[1][..2]);
            }
        }
    }

    #[test]
    fn test_last_window_reaches_end_of_input() {
        let splitter = char_splitter(3, 0);
        let windows = splitter.split_text("abcdefgh").unwrap();
        assert_eq!(windows, vec!["abc", "def", "gh"]);
        assert_eq!(windows.concat(), "abcdefgh");
    }

    #[test]
    fn test_degenerate_window_is_rejected() {
        let splitter = char_splitter(4, 4);
        let err = splitter.split_text("abcdefgh").unwrap_err();
        assert_eq!(
            err,
            SplitError::DegenerateWindow {
                chunk_size: 4,
                overlap: 4
            }
        );
    }

    #[test]
    fn test_degenerate_override_is_rejected() {
        let splitter = char_splitter(10, 0);
        let err = splitter
            .split_text_with("abc", &SplitOptions::new().overlap(10))
            .unwrap_err();
        assert!(matches!(err, SplitError::DegenerateWindow { .. }));
    }

    #[test]
    fn test_empty_text_yields_empty_output() {
        let splitter = char_splitter(4, 1);
        assert!(splitter.split_text("").unwrap().is_empty());
    }

    #[test]
    fn test_chunk_flag_is_ignored() {
        // Windowing happens even when chunking is disabled.
        let splitter = TokenWindowSplitter::with_config(
            SplitConfig::new(4, 0).unwrap().with_chunking(false),
        )
        .with_tokenizer(Arc::new(CharTokenizer));
        let windows = splitter.split_text("abcdefgh").unwrap();
        assert_eq!(windows, vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_tiktoken_window_count() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
        let splitter = TokenWindowSplitter::with_config(SplitConfig::new(32, 8).unwrap());
        let windows = splitter.split_text(&text).unwrap();

        // window starts are 0, step, 2*step, ... while start < total
        let total = count_tokens(&text);
        let step = 32 - 8;
        assert_eq!(windows.len(), (total + step - 1) / step);

        // every window stays within the token budget
        for window in &windows {
            assert!(count_tokens(window) <= 32);
        }
    }
}
