//! Property tests for the compaction core

use prompt_trim_core::*;
use proptest::prelude::*;

/// Small alphabets make repeats likely
fn repetitive_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', ' ', '.', 'é']), 0..120)
        .prop_map(|chars| chars.into_iter().collect())
}

fn phrase_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["the cat ", "sat on ", "a mat ", "again. ", "très bien "]),
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn suffix_array_is_sorted_permutation(text in repetitive_text()) {
        let index = SuffixArrayIndex::new(&text);
        let chars = index.chars();
        let sa = index.suffix_array();

        let mut seen = sa.to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..chars.len()).collect::<Vec<_>>());

        for w in sa.windows(2) {
            prop_assert!(chars[w[0]..] < chars[w[1]..]);
        }
    }

    #[test]
    fn lcp_matches_adjacent_suffixes(text in repetitive_text()) {
        let index = SuffixArrayIndex::new(&text);
        let chars = index.chars();
        let sa = index.suffix_array();
        let lcp = index.lcp();

        for r in 0..sa.len() {
            let expected = if r + 1 < sa.len() {
                chars[sa[r]..]
                    .iter()
                    .zip(&chars[sa[r + 1]..])
                    .take_while(|(a, b)| a == b)
                    .count()
            } else {
                0
            };
            prop_assert_eq!(lcp[r], expected);
        }
    }

    #[test]
    fn detected_chunks_meet_thresholds(
        text in phrase_text(),
        min_length in 1usize..12,
        min_occurrences in 2usize..4,
    ) {
        let chars: Vec<char> = text.chars().collect();
        for chunk in find_repeated_chunks(&text, min_length, min_occurrences) {
            prop_assert!(chunk.len() >= min_length);
            prop_assert!(chunk.occurrences() >= min_occurrences);
            for (start, end) in chunk.spans() {
                let found: String = chars[start..end].iter().collect();
                prop_assert_eq!(&found, &chunk.text);
            }
        }
    }

    #[test]
    fn selected_chunks_do_not_overlap_each_other(text in phrase_text(), min_length in 1usize..12) {
        let chunks = find_repeated_chunks(&text, min_length, 2);
        let selected = select_non_overlapping(&chunks);

        for (i, a) in selected.iter().enumerate() {
            for b in &selected[i + 1..] {
                for (s1, e1) in a.spans() {
                    for (s2, e2) in b.spans() {
                        prop_assert!(e1 <= s2 || e2 <= s1);
                    }
                }
            }
        }
    }

    #[test]
    fn each_rank_grouped_at_most_once(text in repetitive_text(), min_length in 1usize..6) {
        let mut positions: Vec<usize> = find_repeated_chunks(&text, min_length, 2)
            .iter()
            .flat_map(|c| c.positions.iter().copied())
            .collect();
        let total = positions.len();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), total);
    }

    #[test]
    fn deletion_plan_is_disjoint(text in repetitive_text(), keep_first in any::<bool>()) {
        let chunks = find_repeated_chunks(&text, 2, 2);
        let selected = select_non_overlapping(&chunks);
        let plan = DeletionPlan::new(&selected, keep_first);

        for w in plan.deletions().windows(2) {
            prop_assert!(w[1].end() <= w[0].start);
        }
        prop_assert!(plan.removed_chars() <= text.chars().count());
    }

    #[test]
    fn removal_never_grows_text(
        text in phrase_text(),
        min_length in 1usize..12,
        keep_first in any::<bool>(),
    ) {
        let out = compact_repeats(&text, min_length, 2, keep_first);
        prop_assert!(out.chars().count() <= text.chars().count());
    }

    #[test]
    fn keep_first_leaves_one_occurrence(text in phrase_text()) {
        let chunks = find_repeated_chunks(&text, 8, 2);
        let selected = select_non_overlapping(&chunks);
        let out = remove_chunks(&text, &selected, true);

        for chunk in &selected {
            prop_assert!(out.contains(chunk.text.as_str()));
        }
    }
}
