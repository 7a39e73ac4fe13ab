//! Document container and output record types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed metadata mapping carried by documents and produced chunks.
pub type Meta = Map<String, Value>;

/// Metadata key carrying the source document identity on produced chunks.
pub const PARENT_ID_KEY: &str = "parent_id";

/// Metadata key carrying the zero-based source position on produced chunks.
pub const PART_KEY: &str = "part";

/// A caller-supplied document: text plus optional identity and metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// The document text.
    pub data: String,

    /// Opaque identity, propagated to chunks as `parent_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Arbitrary caller metadata.
    #[serde(default)]
    pub meta: Meta,
}

impl Document {
    /// Create a document from its text.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            id: None,
            meta: Meta::new(),
        }
    }

    /// Set the document identity.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the document metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// One produced chunk with its merged metadata.
///
/// Records are created fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// The chunk text.
    pub data: String,

    /// Merged metadata: source metadata, then per-call overrides, then
    /// provenance fields, later entries winning.
    pub meta: Meta,
}
