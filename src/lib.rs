//! Bounded-size text chunking for token-limited pipelines.
//!
//! Splits long documents into chunks that fit downstream input-length limits.
//! Three strategies are provided: splitting on a literal delimiter, splitting
//! at sentence boundaries, and sliding fixed-size token windows with overlap.
//! The first two can re-assemble their pieces into chunks bounded near a
//! target size; the document pipeline attaches metadata provenance to every
//! produced record.
//!
//! ```no_run
//! use textsplit::{DelimiterSplitter, SplitConfig, TextSplitter};
//!
//! let config = SplitConfig::new(256, 32)?;
//! let splitter = DelimiterSplitter::with_config("\n\n", config);
//! let chunks = splitter.split_text("first paragraph\n\nsecond paragraph")?;
//! # Ok::<(), textsplit::SplitError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod length;
pub mod sentence;
pub mod splitters;
pub mod tokenizer;
pub mod types;

pub use error::{Result, SplitError};
pub use length::{CharLength, FnLength, LengthFn, TokenLength};
pub use sentence::{PunctuationDetector, SentenceDetector, UnicodeSentenceDetector};
pub use splitters::{
    merge_text, DelimiterSplitter, SentenceSplitter, TextSplitter, TokenWindowSplitter,
};
pub use tokenizer::{count_tokens, TiktokenTokenizer, Tokenizer};
pub use types::{Document, DocumentChunk, Meta, SplitConfig, SplitOptions};

/// Default chunk size in tokens
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Default chunk overlap in tokens
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;
