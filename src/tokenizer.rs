//! Tokenizer codec used for length measurement and token windowing.

use std::sync::Arc;

/// Text to token-id codec.
///
/// The splitters only rely on `decode` being the inverse of `encode` over
/// contiguous slices; the vocabulary itself is opaque to this crate.
pub trait Tokenizer: Send + Sync {
    /// Encode text into token ids.
    fn encode(&self, text: &str) -> Vec<usize>;

    /// Decode token ids back to text.
    fn decode(&self, tokens: &[usize]) -> String;

    /// Count the tokens in the given text.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Default tokenizer using tiktoken (cl100k_base encoding).
pub struct TiktokenTokenizer {
    bpe: tiktoken_rs::CoreBPE,
}

impl TiktokenTokenizer {
    /// Create a tokenizer with the cl100k_base encoding (GPT-4/ChatGPT).
    pub fn new() -> Self {
        let bpe = tiktoken_rs::cl100k_base().expect("Failed to load cl100k_base encoding");
        Self { bpe }
    }

    /// Create a tokenizer with a specific tiktoken encoding.
    pub fn with_encoding(encoding_name: &str) -> anyhow::Result<Self> {
        let bpe = match encoding_name {
            "cl100k_base" => tiktoken_rs::cl100k_base()?,
            "p50k_base" => tiktoken_rs::p50k_base()?,
            "p50k_edit" => tiktoken_rs::p50k_edit()?,
            "r50k_base" => tiktoken_rs::r50k_base()?,
            _ => tiktoken_rs::cl100k_base()?,
        };
        Ok(Self { bpe })
    }

    /// Shared default instance; loading the BPE ranks is expensive.
    pub fn shared() -> Arc<Self> {
        lazy_static::lazy_static! {
            static ref SHARED: Arc<TiktokenTokenizer> = Arc::new(TiktokenTokenizer::new());
        }
        Arc::clone(&SHARED)
    }
}

impl Default for TiktokenTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encode(&self, text: &str) -> Vec<usize> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[usize]) -> String {
        self.bpe.decode(tokens.to_vec()).unwrap_or_default()
    }
}

/// Count tokens using the shared default tokenizer.
pub fn count_tokens(text: &str) -> usize {
    TiktokenTokenizer::shared().count(text)
}
