//! Base trait shared by all splitting strategies.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::types::{
    Document, DocumentChunk, Meta, SplitConfig, SplitOptions, PARENT_ID_KEY, PART_KEY,
};

/// The core trait all splitting strategies implement.
///
/// A strategy supplies `split_text_with` and exposes its configuration; the
/// document pipeline operations are provided methods built on top of those
/// two. Strategies compose the shared configuration rather than inheriting
/// behavior from it.
pub trait TextSplitter: Send + Sync {
    /// The splitter's configuration.
    fn config(&self) -> &SplitConfig;

    /// Split text into an ordered sequence of chunks, honoring per-call
    /// overrides.
    fn split_text_with(&self, text: &str, opts: &SplitOptions) -> Result<Vec<String>>;

    /// Split text under the construction-time configuration.
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        self.split_text_with(text, &SplitOptions::default())
    }

    /// Measured length of `text` under the configured length function.
    fn get_length(&self, text: &str) -> usize {
        self.config().measure(text)
    }

    /// Split each text and emit one record per chunk.
    ///
    /// Each record carries the matching entry of `metas` (an empty mapping
    /// when absent) merged with `opts.meta`, the per-call metadata winning on
    /// key collisions.
    fn create_documents(
        &self,
        texts: &[&str],
        metas: Option<&[Meta]>,
        opts: &SplitOptions,
    ) -> Result<Vec<DocumentChunk>> {
        let mut records = Vec::new();

        for (i, text) in texts.iter().enumerate() {
            let source_meta = metas.and_then(|m| m.get(i)).cloned().unwrap_or_default();
            let chunks = self.split_text_with(text, opts)?;
            debug!(index = i, chunks = chunks.len(), "split text");

            for chunk in chunks {
                let mut meta = source_meta.clone();
                if let Some(extra) = &opts.meta {
                    merge_into(&mut meta, extra);
                }
                records.push(DocumentChunk { data: chunk, meta });
            }
        }

        debug!(texts = texts.len(), records = records.len(), "created documents");
        Ok(records)
    }

    /// Split documents, attaching provenance to every produced record.
    ///
    /// Metadata precedence, later entries winning: the document's own
    /// metadata, then `opts.meta`, then the provenance fields `parent_id`
    /// (the source document's id, when it has one) and `part` (the zero-based
    /// position of the source document in `docs`).
    fn split_documents(&self, docs: &[Document], opts: &SplitOptions) -> Result<Vec<DocumentChunk>> {
        let texts: Vec<&str> = docs.iter().map(|d| d.data.as_str()).collect();
        let mut metas = Vec::with_capacity(docs.len());

        for (part, doc) in docs.iter().enumerate() {
            let mut meta = doc.meta.clone();
            if let Some(extra) = &opts.meta {
                merge_into(&mut meta, extra);
            }
            // Provenance always wins over caller-supplied metadata.
            if let Some(id) = &doc.id {
                meta.insert(PARENT_ID_KEY.to_string(), Value::String(id.clone()));
            }
            meta.insert(PART_KEY.to_string(), Value::from(part));
            metas.push(meta);
        }

        // Per-call meta is already folded in above; clear it so it cannot
        // override the provenance fields downstream.
        let opts = SplitOptions {
            meta: None,
            ..opts.clone()
        };
        self.create_documents(&texts, Some(&metas), &opts)
    }

    /// Join the documents' contents with a single space.
    fn merge_documents(&self, docs: &[Document]) -> String {
        merge_text(docs.iter().map(|d| d.data.as_str()), " ")
    }
}

/// Trim each text and join with `separator`.
pub fn merge_text<'a, I>(texts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(separator)
}

fn merge_into(meta: &mut Meta, extra: &Meta) {
    for (key, value) in extra {
        meta.insert(key.clone(), value.clone());
    }
}
