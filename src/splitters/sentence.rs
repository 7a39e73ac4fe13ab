//! Sentence-boundary splitting strategy.

use std::sync::Arc;

use crate::assembler::assemble_chunks;
use crate::error::Result;
use crate::sentence::{SentenceDetector, UnicodeSentenceDetector};
use crate::splitters::TextSplitter;
use crate::types::{SplitConfig, SplitOptions};

/// Splits text at sentence boundaries.
///
/// Segmentation is delegated to a [`SentenceDetector`]; sentences are trimmed
/// and empty ones dropped. When chunking is active the sentences are
/// re-assembled into bounded chunks joined with a single space.
pub struct SentenceSplitter {
    config: SplitConfig,
    detector: Arc<dyn SentenceDetector>,
}

impl SentenceSplitter {
    /// Create a splitter with the default configuration and the Unicode
    /// sentence detector.
    pub fn new() -> Self {
        Self {
            config: SplitConfig::default(),
            detector: Arc::new(UnicodeSentenceDetector),
        }
    }

    /// Create a splitter with an explicit configuration.
    pub fn with_config(config: SplitConfig) -> Self {
        Self {
            config,
            detector: Arc::new(UnicodeSentenceDetector),
        }
    }

    /// Replace the sentence detector.
    pub fn with_detector(mut self, detector: Arc<dyn SentenceDetector>) -> Self {
        self.detector = detector;
        self
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSplitter for SentenceSplitter {
    fn config(&self) -> &SplitConfig {
        &self.config
    }

    fn split_text_with(&self, text: &str, opts: &SplitOptions) -> Result<Vec<String>> {
        let config = self.config.resolve(opts)?;
        let sentences = self
            .detector
            .sentences(text)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if config.chunking() {
            Ok(assemble_chunks(sentences, " ", &config))
        } else {
            Ok(sentences.collect())
        }
    }
}
