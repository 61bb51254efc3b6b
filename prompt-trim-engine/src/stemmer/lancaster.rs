//! Lancaster (Paice/Husk) stemmer
//!
//! An iterative, table-driven stemmer. Rules are keyed by the last letter of
//! the word and tried in table order; the first acceptable match is applied
//! and either stops stemming (`.`) or continues with the new word (`>`).

use super::Stemmer;
use std::collections::HashMap;

/// Default rule table
///
/// Each rule reads `<reversed ending>[*]<remove count>[append][> or .]`;
/// `*` limits the rule to words no other rule has touched yet.
const DEFAULT_RULES: &[&str] = &[
    "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
    "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
    "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
    "jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
    "lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
    "msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
    "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
    "tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
    "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
    "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    /// Ending in reading order
    ending: Vec<char>,
    intact_only: bool,
    remove: usize,
    append: String,
    stop: bool,
}

impl Rule {
    fn parse(spec: &str) -> Option<Self> {
        let digit_at = spec.find(|c: char| c.is_ascii_digit())?;
        let (head, tail) = spec.split_at(digit_at);

        let (reversed, intact_only) = match head.strip_suffix('*') {
            Some(ending) => (ending, true),
            None => (head, false),
        };
        if reversed.is_empty() || !reversed.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        let mut rest = tail.chars();
        let remove = rest.next()?.to_digit(10)? as usize;
        let rest: String = rest.collect();
        let (append, stop) = match rest.strip_suffix('.') {
            Some(append) => (append, true),
            None => (rest.strip_suffix('>').unwrap_or(&rest), false),
        };
        if !append.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        Some(Self {
            ending: reversed.chars().rev().collect(),
            intact_only,
            remove,
            append: append.to_string(),
            stop,
        })
    }

    /// Key in the rule index: the last letter of the ending
    fn key(&self) -> Option<char> {
        self.ending.last().copied()
    }
}

/// Lancaster stemmer with the standard rule table
#[derive(Debug, Clone)]
pub struct LancasterStemmer {
    rules: HashMap<char, Vec<Rule>>,
}

impl Default for LancasterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl LancasterStemmer {
    /// Create a stemmer with the default rule table
    pub fn new() -> Self {
        let mut rules: HashMap<char, Vec<Rule>> = HashMap::new();
        for rule in DEFAULT_RULES.iter().filter_map(|spec| Rule::parse(spec)) {
            if let Some(key) = rule.key() {
                rules.entry(key).or_default().push(rule);
            }
        }
        Self { rules }
    }

    fn stem_chars(&self, intact: &[char]) -> Vec<char> {
        let mut word = intact.to_vec();

        loop {
            let Some(last) = last_letter(&word) else {
                break;
            };
            let Some(candidates) = self.rules.get(&word[last]) else {
                break;
            };

            let applied = candidates.iter().find(|rule| {
                word.ends_with(&rule.ending)
                    && (!rule.intact_only || word == intact)
                    && is_acceptable(&word, rule.remove)
            });

            match applied {
                Some(rule) => {
                    word.truncate(word.len() - rule.remove);
                    word.extend(rule.append.chars());
                    if rule.stop {
                        break;
                    }
                }
                None => break,
            }
        }

        word
    }
}

impl Stemmer for LancasterStemmer {
    fn stem(&self, word: &str) -> String {
        let intact: Vec<char> = word.to_lowercase().chars().collect();
        self.stem_chars(&intact).into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "lancaster"
    }
}

/// Position of the last letter in the word's leading alphabetic run
fn last_letter(word: &[char]) -> Option<usize> {
    let run = word.iter().take_while(|c| c.is_alphabetic()).count();
    run.checked_sub(1)
}

/// Whether removing `remove` characters leaves a plausible stem
fn is_acceptable(word: &[char], remove: usize) -> bool {
    let Some(remaining) = word.len().checked_sub(remove) else {
        return false;
    };

    if VOWELS.contains(&word[0]) {
        remaining >= 2
    } else {
        remaining >= 3 && (VOWELS.contains(&word[1]) || VOWELS.contains(&word[2]))
    }
}
