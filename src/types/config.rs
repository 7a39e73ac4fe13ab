//! Splitter configuration and per-call overrides.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SplitError};
use crate::length::{LengthFn, TokenLength};
use crate::types::Meta;
use crate::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Immutable-after-construction splitter settings.
///
/// Construction enforces `overlap <= chunk_size` and `chunk_size >= 1`; the
/// invariant holds for the life of the instance because no mutator can break
/// it. The length function is shared behind an `Arc`, so configs clone
/// cheaply and instances are safe to share across threads.
#[derive(Clone)]
pub struct SplitConfig {
    chunk_size: usize,
    overlap: usize,
    chunk: bool,
    length: Arc<dyn LengthFn>,
}

impl SplitConfig {
    /// Create a config with the given chunk size and overlap, measuring by
    /// token count.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        validate(chunk_size, overlap)?;
        Ok(Self {
            chunk_size,
            overlap,
            chunk: true,
            length: Arc::new(TokenLength::new()),
        })
    }

    /// Set whether `split_text` re-assembles pieces into bounded chunks
    /// (true, the default) or returns raw pieces.
    pub fn with_chunking(mut self, chunk: bool) -> Self {
        self.chunk = chunk;
        self
    }

    /// Replace the length function.
    pub fn with_length(mut self, length: Arc<dyn LengthFn>) -> Self {
        self.length = length;
        self
    }

    /// Target chunk size in measured units.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Overlap budget in measured units.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Whether chunk re-assembly is active.
    pub fn chunking(&self) -> bool {
        self.chunk
    }

    /// Measure text under the configured length function.
    pub fn measure(&self, text: &str) -> usize {
        self.length.measure(text)
    }

    /// Apply per-call overrides, re-validating the overlap invariant.
    pub fn resolve(&self, opts: &SplitOptions) -> Result<SplitConfig> {
        let chunk_size = opts.chunk_size.unwrap_or(self.chunk_size);
        let overlap = opts.overlap.unwrap_or(self.overlap);
        validate(chunk_size, overlap)?;
        Ok(Self {
            chunk_size,
            overlap,
            chunk: opts.chunk.unwrap_or(self.chunk),
            length: opts
                .length
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.length)),
        })
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
            chunk: true,
            length: Arc::new(TokenLength::new()),
        }
    }
}

impl fmt::Debug for SplitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitConfig")
            .field("chunk_size", &self.chunk_size)
            .field("overlap", &self.overlap)
            .field("chunk", &self.chunk)
            .finish_non_exhaustive()
    }
}

fn validate(chunk_size: usize, overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(SplitError::ZeroChunkSize);
    }
    if overlap > chunk_size {
        return Err(SplitError::OverlapExceedsChunkSize {
            chunk_size,
            overlap,
        });
    }
    Ok(())
}

/// Per-call overrides for a single splitting operation.
///
/// Every field is optional; unset fields fall back to the splitter's
/// configuration. `meta` is merged into every record the call produces.
#[derive(Clone, Default)]
pub struct SplitOptions {
    pub chunk_size: Option<usize>,
    pub overlap: Option<usize>,
    pub chunk: Option<bool>,
    pub length: Option<Arc<dyn LengthFn>>,
    pub meta: Option<Meta>,
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the chunk size for this call.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Override the overlap for this call.
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.overlap = Some(overlap);
        self
    }

    /// Override the chunking flag for this call.
    pub fn chunking(mut self, chunk: bool) -> Self {
        self.chunk = Some(chunk);
        self
    }

    /// Override the length function for this call.
    pub fn length(mut self, length: Arc<dyn LengthFn>) -> Self {
        self.length = Some(length);
        self
    }

    /// Extra metadata merged into every record produced by this call.
    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl fmt::Debug for SplitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitOptions")
            .field("chunk_size", &self.chunk_size)
            .field("overlap", &self.overlap)
            .field("chunk", &self.chunk)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::CharLength;

    #[test]
    fn test_overlap_must_not_exceed_chunk_size() {
        let err = SplitConfig::new(10, 11).unwrap_err();
        assert_eq!(
            err,
            SplitError::OverlapExceedsChunkSize {
                chunk_size: 10,
                overlap: 11
            }
        );
    }

    #[test]
    fn test_overlap_equal_to_chunk_size_is_allowed() {
        // Rejected later by the token-window splitter, but fine to construct.
        assert!(SplitConfig::new(10, 10).is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert_eq!(SplitConfig::new(0, 0).unwrap_err(), SplitError::ZeroChunkSize);
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let config = SplitConfig::new(100, 10).unwrap();
        let opts = SplitOptions::new()
            .chunk_size(20)
            .overlap(5)
            .chunking(false)
            .length(Arc::new(CharLength));
        let resolved = config.resolve(&opts).unwrap();
        assert_eq!(resolved.chunk_size(), 20);
        assert_eq!(resolved.overlap(), 5);
        assert!(!resolved.chunking());
        assert_eq!(resolved.measure("abcd"), 4);
    }

    #[test]
    fn test_resolve_revalidates_invariant() {
        let config = SplitConfig::new(100, 50).unwrap();
        let err = config
            .resolve(&SplitOptions::new().chunk_size(10))
            .unwrap_err();
        assert_eq!(
            err,
            SplitError::OverlapExceedsChunkSize {
                chunk_size: 10,
                overlap: 50
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.overlap(), DEFAULT_CHUNK_OVERLAP);
        assert!(config.chunking());
    }
}
