//! Porter stemmer
//!
//! Porter's 1980 suffix-stripping algorithm with the common extensions found
//! in widely used implementations:
//!
//! - a small table of irregular forms (`dying` → `die`, `skies` → `sky`)
//! - `-ies` / `-ied` on four-letter words keep their `e` (`ties` → `tie`)
//! - terminal `y` becomes `i` only after a consonant (`happy` → `happi`,
//!   `day` stays)
//! - step 2 also handles `-fulli` and `-logi`, and reduces `-alli` first
//! - two-letter vowel-consonant stems count as cvc (`owed` → `owe`)
//!
//! Each step takes the word and returns the rewritten word. Within a rule
//! list only the first matching suffix is considered; if its condition
//! fails the word is left as it is.

use super::Stemmer;

/// Irregular forms, looked up on the lower-cased word
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Suffix, replacement, and a condition on the remaining stem
type Rule = (&'static str, &'static str, fn(&[char]) -> bool);

/// Porter stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer
    pub fn new() -> Self {
        Self
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == lower) {
            return (*stem).to_string();
        }

        let chars: Vec<char> = lower.chars().collect();
        if chars.len() <= 2 {
            return lower;
        }

        let chars = step1a(chars);
        let chars = step1b(chars);
        let chars = step1c(chars);
        let chars = step2(chars);
        let chars = step3(chars);
        let chars = step4(chars);
        let chars = step5a(chars);
        let chars = step5b(chars);

        chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

fn is_consonant(word: &[char], i: usize) -> bool {
    match word[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant transitions, Porter's `m`
fn measure(stem: &[char]) -> usize {
    (1..stem.len())
        .filter(|&i| !is_consonant(stem, i - 1) && is_consonant(stem, i))
        .count()
}

fn positive_measure(stem: &[char]) -> bool {
    measure(stem) > 0
}

fn measure_above_one(stem: &[char]) -> bool {
    measure(stem) > 1
}

fn contains_vowel(stem: &[char]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// Consonant-vowel-consonant ending, last letter not w, x or y
fn ends_cvc(word: &[char]) -> bool {
    let n = word.len();
    if n >= 3
        && is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], 'w' | 'x' | 'y')
    {
        return true;
    }
    n == 2 && !is_consonant(word, 0) && is_consonant(word, 1)
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let len = suffix.chars().count();
    len <= word.len() && word[word.len() - len..].iter().copied().eq(suffix.chars())
}

/// `word` without its last `strip` characters, followed by `replacement`
fn replace_tail(word: &[char], strip: usize, replacement: &str) -> Vec<char> {
    let mut out = word[..word.len() - strip].to_vec();
    out.extend(replacement.chars());
    out
}

fn apply_rules(word: Vec<char>, rules: &[Rule]) -> Vec<char> {
    for &(suffix, replacement, condition) in rules {
        if ends_with(&word, suffix) {
            let strip = suffix.chars().count();
            let stem = &word[..word.len() - strip];
            return if condition(stem) {
                replace_tail(&word, strip, replacement)
            } else {
                word
            };
        }
    }
    word
}

fn always(_: &[char]) -> bool {
    true
}

fn ends_consonant(stem: &[char]) -> bool {
    stem.len() > 1 && is_consonant(stem, stem.len() - 1)
}

/// The l of -logi stays with the stem so that geo-, theo- etc. qualify
fn measured_with_l(stem: &[char]) -> bool {
    let mut with_l = stem.to_vec();
    with_l.push('l');
    positive_measure(&with_l)
}

fn measured_after_s_or_t(stem: &[char]) -> bool {
    measure_above_one(stem) && matches!(stem.last(), Some('s' | 't'))
}

/// Plurals
fn step1a(word: Vec<char>) -> Vec<char> {
    if word.len() == 4 && ends_with(&word, "ies") {
        return replace_tail(&word, 3, "ie");
    }
    apply_rules(
        word,
        &[
            ("sses", "ss", always),
            ("ies", "i", always),
            ("ss", "ss", always),
            ("s", "", always),
        ],
    )
}

/// -eed, -ed and -ing
fn step1b(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "ied") {
        let replacement = if word.len() == 4 { "ie" } else { "i" };
        return replace_tail(&word, 3, replacement);
    }

    if ends_with(&word, "eed") {
        let stem = &word[..word.len() - 3];
        return if measure(stem) > 0 {
            replace_tail(&word, 3, "ee")
        } else {
            word
        };
    }

    let stem = ["ed", "ing"].iter().find_map(|suffix| {
        if !ends_with(&word, suffix) {
            return None;
        }
        let stem = &word[..word.len() - suffix.len()];
        contains_vowel(stem).then(|| stem.to_vec())
    });
    let Some(mut stem) = stem else {
        return word;
    };

    if ends_with(&stem, "at") || ends_with(&stem, "bl") || ends_with(&stem, "iz") {
        stem.push('e');
    } else if ends_double_consonant(&stem) {
        if !matches!(stem.last(), Some('l' | 's' | 'z')) {
            stem.pop();
        }
    } else if measure(&stem) == 1 && ends_cvc(&stem) {
        stem.push('e');
    }
    stem
}

/// Terminal y after a consonant becomes i
fn step1c(word: Vec<char>) -> Vec<char> {
    apply_rules(word, &[("y", "i", ends_consonant)])
}

/// Double suffixes to single ones
fn step2(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "alli") && positive_measure(&word[..word.len() - 4]) {
        return step2(replace_tail(&word, 4, "al"));
    }

    apply_rules(
        word,
        &[
            ("ational", "ate", positive_measure),
            ("tional", "tion", positive_measure),
            ("enci", "ence", positive_measure),
            ("anci", "ance", positive_measure),
            ("izer", "ize", positive_measure),
            ("bli", "ble", positive_measure),
            ("alli", "al", positive_measure),
            ("entli", "ent", positive_measure),
            ("eli", "e", positive_measure),
            ("ousli", "ous", positive_measure),
            ("ization", "ize", positive_measure),
            ("ation", "ate", positive_measure),
            ("ator", "ate", positive_measure),
            ("alism", "al", positive_measure),
            ("iveness", "ive", positive_measure),
            ("fulness", "ful", positive_measure),
            ("ousness", "ous", positive_measure),
            ("aliti", "al", positive_measure),
            ("iviti", "ive", positive_measure),
            ("biliti", "ble", positive_measure),
            ("fulli", "ful", positive_measure),
            ("logi", "log", measured_with_l),
        ],
    )
}

/// -ic-, -full, -ness etc.
fn step3(word: Vec<char>) -> Vec<char> {
    apply_rules(
        word,
        &[
            ("icate", "ic", positive_measure),
            ("ative", "", positive_measure),
            ("alize", "al", positive_measure),
            ("iciti", "ic", positive_measure),
            ("ical", "ic", positive_measure),
            ("ful", "", positive_measure),
            ("ness", "", positive_measure),
        ],
    )
}

/// Strip -ant, -ence etc. from long stems
fn step4(word: Vec<char>) -> Vec<char> {
    apply_rules(
        word,
        &[
            ("al", "", measure_above_one),
            ("ance", "", measure_above_one),
            ("ence", "", measure_above_one),
            ("er", "", measure_above_one),
            ("ic", "", measure_above_one),
            ("able", "", measure_above_one),
            ("ible", "", measure_above_one),
            ("ant", "", measure_above_one),
            ("ement", "", measure_above_one),
            ("ment", "", measure_above_one),
            ("ent", "", measure_above_one),
            ("ion", "", measured_after_s_or_t),
            ("ou", "", measure_above_one),
            ("ism", "", measure_above_one),
            ("ate", "", measure_above_one),
            ("iti", "", measure_above_one),
            ("ous", "", measure_above_one),
            ("ive", "", measure_above_one),
            ("ize", "", measure_above_one),
        ],
    )
}

/// Final -e
fn step5a(word: Vec<char>) -> Vec<char> {
    if !ends_with(&word, "e") {
        return word;
    }
    let stem = &word[..word.len() - 1];
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
        stem.to_vec()
    } else {
        word
    }
}

/// Final -ll on long stems
fn step5b(mut word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "ll") && measure(&word[..word.len() - 1]) > 1 {
        word.pop();
    }
    word
}
