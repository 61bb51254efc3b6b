//! Chunk removal
//!
//! Turns a chunk selection into an explicit deletion plan and applies it.
//! Occurrence spans are merged where they overlap, which only happens
//! between occurrences of the same chunk, and the occurrence each chunk keeps
//! is carved back out. The remaining intervals are disjoint, sorted by
//! descending start offset and applied in one pass, each replaced by a
//! single space.

use crate::chunk::Chunk;

/// Text inserted in place of each deleted span, keeps neighbouring words apart
const REPLACEMENT: char = ' ';

/// One span scheduled for deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    /// Character offset where the span starts
    pub start: usize,
    /// Span length in characters
    pub len: usize,
}

impl Deletion {
    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// All deletions for one buffer, disjoint and ordered by descending start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    deletions: Vec<Deletion>,
    occurrences: usize,
}

impl DeletionPlan {
    /// Build the plan for a chunk selection
    ///
    /// With `keep_first`, the occurrence at the smallest offset of each chunk
    /// survives in full, even when later occurrences of the same chunk
    /// overlap it.
    pub fn new(selection: &[Chunk], keep_first: bool) -> Self {
        let mut spans = Vec::new();
        let mut kept = Vec::new();

        for chunk in selection {
            let mut positions = chunk.positions.clone();
            positions.sort_unstable();
            positions.dedup();

            let mut starts = positions.into_iter();
            if keep_first {
                if let Some(first) = starts.next() {
                    kept.push((first, first + chunk.len()));
                }
            }
            spans.extend(starts.map(|start| (start, start + chunk.len())));
        }

        let occurrences = spans.len();
        kept.sort_unstable();

        let mut deletions: Vec<Deletion> = subtract(merge(spans), &kept)
            .into_iter()
            .map(|(start, end)| Deletion {
                start,
                len: end - start,
            })
            .collect();
        deletions.reverse();

        Self {
            deletions,
            occurrences,
        }
    }

    /// Deletions in application order (highest offset first)
    pub fn deletions(&self) -> &[Deletion] {
        &self.deletions
    }

    /// Number of disjoint intervals to delete
    pub fn len(&self) -> usize {
        self.deletions.len()
    }

    /// Whether nothing is scheduled
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
    }

    /// Number of chunk occurrences scheduled for deletion, before merging
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Total characters removed before replacement spaces are inserted
    pub fn removed_chars(&self) -> usize {
        self.deletions.iter().map(|d| d.len).sum()
    }

    /// Apply the plan to `text` in a single pass
    ///
    /// Deletions that run past the end of the buffer are skipped.
    pub fn apply(&self, text: &str) -> String {
        if self.deletions.is_empty() {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        // Reverse plan order visits the spans left to right
        for d in self.deletions.iter().rev() {
            if d.len == 0 || d.end() > chars.len() {
                continue;
            }
            out.extend(&chars[cursor..d.start]);
            out.push(REPLACEMENT);
            cursor = d.end();
        }
        out.extend(&chars[cursor..]);

        out
    }
}

/// Union of half-open spans, ascending; touching spans stay separate
fn merge(mut spans: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    spans.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Remove the `kept` spans (ascending) from every span in `spans`
fn subtract(spans: Vec<(usize, usize)>, kept: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(spans.len());
    for (mut start, end) in spans {
        for &(kept_start, kept_end) in kept {
            if kept_end <= start || kept_start >= end {
                continue;
            }
            if kept_start > start {
                out.push((start, kept_start));
            }
            start = start.max(kept_end);
            if start >= end {
                break;
            }
        }
        if start < end {
            out.push((start, end));
        }
    }
    out
}

/// Delete redundant chunk occurrences from `text`
///
/// `selection` must come from
/// [`select_non_overlapping`](crate::overlap::select_non_overlapping) run on
/// chunks detected in this same `text`.
pub fn remove_chunks(text: &str, selection: &[Chunk], keep_first: bool) -> String {
    DeletionPlan::new(selection, keep_first).apply(text)
}
