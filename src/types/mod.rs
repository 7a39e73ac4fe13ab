//! Core types for the splitting library.

mod config;
mod document;

pub use config::{SplitConfig, SplitOptions};
pub use document::{Document, DocumentChunk, Meta, PARENT_ID_KEY, PART_KEY};
