//! Greedy forward-merge of pieces into bounded chunks.

use crate::types::SplitConfig;

/// Merge trimmed pieces into chunks bounded near `chunk_size`.
///
/// The last chunk in the output is the only one eligible for growth: while
/// its measured length is strictly below `chunk_size + overlap` it keeps
/// absorbing pieces, joined by `separator`. The ceiling intentionally
/// includes the overlap budget, so a chunk may exceed the nominal target by
/// up to `overlap`, trading strict bounding for contextual continuity.
///
/// Pieces are never split: a single piece longer than `chunk_size` passes
/// through whole. An empty piece sequence yields an empty output.
pub fn assemble_chunks<I>(pieces: I, separator: &str, config: &SplitConfig) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let ceiling = config.chunk_size() + config.overlap();
    let mut chunks: Vec<String> = Vec::new();

    for piece in pieces {
        let grow = chunks
            .last()
            .map_or(false, |last| config.measure(last) < ceiling);
        let mut acc = if grow {
            chunks.pop().unwrap_or_default()
        } else {
            String::new()
        };

        if acc.is_empty() {
            acc = piece;
        } else {
            acc.push_str(separator);
            acc.push_str(&piece);
        }

        if !acc.is_empty() {
            chunks.push(acc);
        }
    }

    chunks
}
