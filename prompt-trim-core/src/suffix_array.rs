//! Suffix array and LCP array construction
//!
//! Builds a suffix array over the characters of a text buffer by:
//! 1. Ranking suffixes by their first character
//! 2. Prefix doubling: re-ranking by `(rank[i], rank[i + k])` pairs with a
//!    stable counting sort until every rank is distinct
//!
//! The LCP array is then derived in linear time with Kasai's algorithm.
//!
//! Ordering is plain code-point order, and a suffix that is a proper prefix of
//! another sorts first. All suffixes of one buffer are distinct, so the final
//! order has no ties.

/// Suffix array and LCP array for one immutable text buffer
#[derive(Debug, Clone)]
pub struct SuffixArrayIndex {
    /// Characters of the indexed buffer
    text: Vec<char>,
    /// Start offsets of all suffixes in sorted order
    suffix_array: Vec<usize>,
    /// `lcp[i]` = common prefix of suffixes at ranks `i` and `i + 1`
    lcp: Vec<usize>,
}

impl SuffixArrayIndex {
    /// Build the index for `text`
    ///
    /// Time: O(n log n) for the suffix array, O(n) for the LCP array.
    pub fn new(text: &str) -> Self {
        Self::from_chars(text.chars().collect())
    }

    /// Build the index from an already decoded character buffer
    pub fn from_chars(text: Vec<char>) -> Self {
        let suffix_array = build_suffix_array(&text);
        let lcp = build_lcp_array(&text, &suffix_array);

        Self {
            text,
            suffix_array,
            lcp,
        }
    }

    /// Indexed characters
    pub fn chars(&self) -> &[char] {
        &self.text
    }

    /// Buffer length in characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the indexed buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sorted suffix start offsets
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// Longest-common-prefix lengths between adjacent ranks
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Substring of `len` characters starting at `start`
    pub fn substring(&self, start: usize, len: usize) -> String {
        self.text[start..start + len].iter().collect()
    }
}

/// Prefix-doubling construction
fn build_suffix_array(text: &[char]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Initial ranking by first character
    let mut sa: Vec<usize> = (0..n).collect();
    sa.sort_by_key(|&i| text[i]);

    let mut rank = vec![0usize; n];
    for w in 1..n {
        let bump = usize::from(text[sa[w]] != text[sa[w - 1]]);
        rank[sa[w]] = rank[sa[w - 1]] + bump;
    }

    let mut by_second = vec![0usize; n];
    let mut next_rank = vec![0usize; n];
    let mut k = 1;

    while rank[sa[n - 1]] < n - 1 && k < n {
        // Order by second key: suffixes without a partner at i + k come
        // first, the rest follow the current order shifted back by k.
        let mut p = 0;
        for i in (n - k)..n {
            by_second[p] = i;
            p += 1;
        }
        for &s in &sa {
            if s >= k {
                by_second[p] = s - k;
                p += 1;
            }
        }

        // Stable counting sort on the first key
        let classes = rank[sa[n - 1]] + 1;
        let mut slots = vec![0usize; classes + 1];
        for &r in &rank {
            slots[r + 1] += 1;
        }
        for c in 1..=classes {
            slots[c] += slots[c - 1];
        }
        for &s in &by_second {
            let r = rank[s];
            sa[slots[r]] = s;
            slots[r] += 1;
        }

        let second = |i: usize, rank: &[usize]| (i + k < n).then(|| rank[i + k]);

        next_rank[sa[0]] = 0;
        for w in 1..n {
            let (a, b) = (sa[w - 1], sa[w]);
            let same = rank[a] == rank[b] && second(a, &rank) == second(b, &rank);
            next_rank[b] = next_rank[a] + usize::from(!same);
        }
        std::mem::swap(&mut rank, &mut next_rank);

        k *= 2;
    }

    sa
}

/// Kasai's algorithm
fn build_lcp_array(text: &[char], sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];
    if n == 0 {
        return lcp;
    }

    let mut rank = vec![0usize; n];
    for (r, &pos) in sa.iter().enumerate() {
        rank[pos] = r;
    }

    let mut h = 0usize;
    for i in 0..n {
        if rank[i] == n - 1 {
            h = 0;
            continue;
        }

        let j = sa[rank[i] + 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
