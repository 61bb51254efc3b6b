//! Greedy overlap resolution
//!
//! Walks chunks in priority order and keeps a chunk only when none of its
//! occurrence spans touches a character already claimed by an accepted
//! chunk. Rejected chunks are dropped whole, never trimmed.

use crate::chunk::Chunk;

/// Select a pairwise non-overlapping subset of `chunks`
///
/// `chunks` must already be in priority order (see
/// [`rank_chunks`](crate::chunk::rank_chunks)); the output preserves that
/// order. Only spans of different chunks are kept apart: the occurrences of
/// one chunk may overlap each other (`"aaa"` in `"aaaa"`), which
/// [`DeletionPlan`](crate::removal::DeletionPlan) accounts for.
pub fn select_non_overlapping(chunks: &[Chunk]) -> Vec<Chunk> {
    let extent = chunks
        .iter()
        .flat_map(|c| c.spans().map(|(_, end)| end))
        .max()
        .unwrap_or(0);
    let mut claimed = vec![false; extent];
    let mut selected = Vec::new();

    for chunk in chunks {
        if chunk.is_empty() {
            continue;
        }

        let free = chunk
            .spans()
            .all(|(start, end)| claimed[start..end].iter().all(|&c| !c));
        if !free {
            continue;
        }

        for (start, end) in chunk.spans() {
            claimed[start..end].iter_mut().for_each(|c| *c = true);
        }
        selected.push(chunk.clone());
    }

    selected
}
