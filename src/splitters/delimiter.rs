//! Delimiter-based splitting strategy.

use crate::assembler::assemble_chunks;
use crate::error::Result;
use crate::splitters::TextSplitter;
use crate::types::{SplitConfig, SplitOptions};

/// Splits text on a fixed literal separator.
///
/// Pieces are trimmed and empty pieces dropped. When chunking is active the
/// pieces are re-assembled into bounded chunks, joined with the same
/// separator they were split on.
pub struct DelimiterSplitter {
    config: SplitConfig,
    delimiter: String,
}

impl DelimiterSplitter {
    /// Create a splitter over `delimiter` with the default configuration.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            config: SplitConfig::default(),
            delimiter: delimiter.into(),
        }
    }

    /// Create a splitter over `delimiter` with an explicit configuration.
    pub fn with_config(delimiter: impl Into<String>, config: SplitConfig) -> Self {
        Self {
            config,
            delimiter: delimiter.into(),
        }
    }

    /// The literal separator this splitter splits on.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl TextSplitter for DelimiterSplitter {
    fn config(&self) -> &SplitConfig {
        &self.config
    }

    fn split_text_with(&self, text: &str, opts: &SplitOptions) -> Result<Vec<String>> {
        let config = self.config.resolve(opts)?;
        let pieces = text
            .split(self.delimiter.as_str())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string);

        if config.chunking() {
            Ok(assemble_chunks(pieces, &self.delimiter, &config))
        } else {
            Ok(pieces.collect())
        }
    }
}
