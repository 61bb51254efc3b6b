//! Repeated chunk detection
//!
//! Scans the LCP array for runs of adjacent suffixes sharing a long common
//! prefix. Each run becomes one [`Chunk`]: the shared prefix plus the start
//! offsets of every suffix in the run.

use crate::suffix_array::SuffixArrayIndex;
use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A repeated substring and the offsets where it occurs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    /// Repeated text
    pub text: String,
    /// Character offsets of each occurrence, in suffix-array order
    pub positions: Vec<usize>,
    /// Length of `text` in characters
    len: usize,
}

impl Chunk {
    /// Create a chunk from its text and occurrence offsets
    pub fn new(text: impl Into<String>, positions: Vec<usize>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            positions,
            len,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chunk text is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occurrences
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }

    /// Smallest occurrence offset
    pub fn first_position(&self) -> Option<usize> {
        self.positions.iter().copied().min()
    }

    /// Half-open character spans of every occurrence
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().map(move |&p| (p, p + self.len))
    }
}

/// Find maximal repeated substrings of `text`
///
/// Returns chunks with at least `min_occurrences` occurrences and at least
/// `min_length` characters, ranked by [`rank_chunks`].
pub fn find_repeated_chunks(text: &str, min_length: usize, min_occurrences: usize) -> Vec<Chunk> {
    let index = SuffixArrayIndex::new(text);
    let mut chunks = scan_lcp_runs(&index, min_length, min_occurrences);
    rank_chunks(&mut chunks);
    chunks
}

/// Group LCP runs into chunks, in scan order
///
/// A run starts at the first rank `i` with `lcp[i] >= min_length`; its
/// length is fixed to `lcp[i]` and it extends while following LCP values
/// stay at or above that length. The ranks `i..=j` all share the prefix.
/// The scan resumes after rank `j`, so each rank is grouped at most once.
fn scan_lcp_runs(index: &SuffixArrayIndex, min_length: usize, min_occurrences: usize) -> Vec<Chunk> {
    let sa = index.suffix_array();
    let lcp = index.lcp();
    let n = lcp.len();
    let min_length = min_length.max(1);

    let mut chunks = Vec::new();
    let mut i = 0;

    while i < n {
        if lcp[i] < min_length {
            i += 1;
            continue;
        }

        let run = lcp[i];
        let mut j = i + 1;
        while j < n && lcp[j] >= run {
            j += 1;
        }

        // lcp[j - 1] >= run also ties rank j into the group
        let positions: Vec<usize> = sa[i..=j.min(n - 1)].to_vec();
        if positions.len() >= min_occurrences {
            chunks.push(Chunk {
                text: index.substring(positions[0], run),
                positions,
                len: run,
            });
        }

        i = j + 1;
    }

    chunks
}

/// Sort chunks into resolution priority
///
/// Occurrence count descending, then length descending, then first position
/// ascending.
pub fn rank_chunks(chunks: &mut [Chunk]) {
    chunks.sort_by_key(|c| {
        (
            Reverse(c.occurrences()),
            Reverse(c.len()),
            c.first_position().unwrap_or(usize::MAX),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_occurrences_detected() {
        let chunks = find_repeated_chunks("hello world, hello world", 5, 2);

        let top = &chunks[0];
        assert_eq!(top.text, "hello world");
        assert_eq!(top.occurrences(), 2);
        let mut positions = top.positions.clone();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 13]);
    }

    #[test]
    fn test_thresholds_respected() {
        let text = "abcabcabc xyz xyz";
        for chunk in find_repeated_chunks(text, 3, 2) {
            assert!(chunk.len() >= 3);
            assert!(chunk.occurrences() >= 2);
        }

        assert!(find_repeated_chunks(text, 3, 4).is_empty());
    }

    #[test]
    fn test_three_occurrences_grouped() {
        let chunks = find_repeated_chunks("one two; one two; one two", 7, 3);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "one two");
        assert_eq!(chunks[0].occurrences(), 3);
    }

    #[test]
    fn test_each_rank_grouped_once() {
        // "abc" also starts at 12; its rank ends the "abcde" run and must not
        // open a second run pairing it with position 6
        let chunks = find_repeated_chunks("abcdeXabcdeYabcf", 3, 2);

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcde", "bcde", "cde"]);
        assert_eq!(chunks[0].positions, vec![0, 6]);

        let mut seen: Vec<usize> = chunks.iter().flat_map(|c| c.positions.clone()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_ranking_order() {
        let mut chunks = vec![
            Chunk::new("short", vec![10, 20]),
            Chunk::new("longer text", vec![30, 40]),
            Chunk::new("xyz", vec![1, 2, 3]),
            Chunk::new("short", vec![5, 50]),
        ];
        rank_chunks(&mut chunks);

        assert_eq!(chunks[0].text, "xyz");
        assert_eq!(chunks[1].text, "longer text");
        assert_eq!(chunks[2].positions, vec![5, 50]);
        assert_eq!(chunks[3].positions, vec![10, 20]);
    }

    #[test]
    fn test_no_chunks_in_short_or_empty_text() {
        assert!(find_repeated_chunks("", 1, 2).is_empty());
        assert!(find_repeated_chunks("ab", 1, 2).is_empty());
    }

    #[test]
    fn test_chunk_accessors() {
        let chunk = Chunk::new("naïve", vec![7, 2]);
        assert_eq!(chunk.len(), 5);
        assert_eq!(chunk.first_position(), Some(2));
        assert_eq!(chunk.spans().collect::<Vec<_>>(), vec![(7, 12), (2, 7)]);
    }

    #[test]
    fn test_quick_brown_fox_scenario() {
        let text = "The quick brown fox jumps over the lazy dog. \
                    The quick brown fox jumps over another lazy dog.";
        let chunks = find_repeated_chunks(text, 10, 2);

        let top = &chunks[0];
        assert_eq!(top.text, "The quick brown fox jumps over ");
        assert_eq!(top.occurrences(), 2);
        assert_eq!(top.first_position(), Some(0));
    }
}
