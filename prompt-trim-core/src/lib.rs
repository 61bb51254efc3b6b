//! Repeated-chunk compaction core
//!
//! This crate contains the deterministic, allocation-only algorithms behind
//! prompt trimming:
//!
//! - [`SuffixArrayIndex`]: suffix array and Kasai LCP array over characters
//! - [`find_repeated_chunks`]: maximal repeated substrings from LCP runs
//! - [`select_non_overlapping`]: greedy, priority-ordered chunk selection
//! - [`remove_chunks`]: back-to-front deletion of redundant occurrences
//!
//! All positions are character offsets, never byte offsets.
//!
//! # Example
//!
//! ```rust
//! use prompt_trim_core::{compact_repeats, find_repeated_chunks};
//!
//! let text = "the cat sat on the mat. the cat sat on the rug.";
//! let chunks = find_repeated_chunks(text, 10, 2);
//! assert!(chunks.iter().all(|c| c.occurrences() >= 2 && c.len() >= 10));
//!
//! let compacted = compact_repeats(text, 10, 2, true);
//! assert!(compacted.chars().count() <= text.chars().count());
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod overlap;
pub mod removal;
pub mod suffix_array;

pub use chunk::{find_repeated_chunks, rank_chunks, Chunk};
pub use overlap::select_non_overlapping;
pub use removal::{remove_chunks, Deletion, DeletionPlan};
pub use suffix_array::SuffixArrayIndex;

/// Run detection, overlap resolution and removal in one call.
///
/// Equivalent to chaining [`find_repeated_chunks`], [`select_non_overlapping`]
/// and [`remove_chunks`].
pub fn compact_repeats(
    text: &str,
    min_length: usize,
    min_occurrences: usize,
    keep_first: bool,
) -> String {
    let chunks = find_repeated_chunks(text, min_length, min_occurrences);
    let selected = select_non_overlapping(&chunks);
    remove_chunks(text, &selected, keep_first)
}
