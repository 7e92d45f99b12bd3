use crate::prelude::*;

use anyhow::Context;
use core::fmt;
use std::{collections::HashSet, path::Path, sync::Arc};

lazy_static::lazy_static! {
    /// A small four-letter dictionary, enough for the classic ladders
    /// (cold -> warm, head -> tail, love -> hate, ...).
    pub static ref DEFAULT_WORDS: Arc<HashSet<String>> = Arc::new(
        "bale band bane bare base bass bate bell belt bold bolt bond bone bore
         cage came cane card care cart case cast code cold cole colt come cone cope
         cord core cost cote dare date dole dome done dose dote dove fare fast fate
         fine fire fist five fore fork form gale game gate gave give hale hall halt
         hand hard hare harm hate have head heal heat held helm herd here hire hold
         hole home hose host lame land lane late line live load lone lord lore lose
         love mare mate mile mild mole more most move mist nose note pale pass past
         pole pore port post rate rave ride rode role rose sale same sane save sole
         some sore tail tale tall teal tell told toll tore vase vast vole vote wade
         wake ward ware warm wart wild will wine wire wise word wore work worm wove"
            .split_whitespace()
            .map(String::from)
            .collect()
    );
}

/// Change one letter at a time, staying within the dictionary, until `from`
/// becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLadder {
    pub from: String,
    pub to: String,
    words: Arc<HashSet<String>>,
}

impl WordLadder {
    pub fn new(from: &str, to: &str, words: Arc<HashSet<String>>) -> anyhow::Result<WordLadder> {
        let from = normalize(from)?;
        let to = normalize(to)?;
        if from.len() != to.len() {
            anyhow::bail!(
                "Words must have the same length, got {:?} and {:?}",
                from,
                to
            );
        }

        Ok(WordLadder { from, to, words })
    }

    pub fn with_default_words(from: &str, to: &str) -> anyhow::Result<WordLadder> {
        WordLadder::new(from, to, Arc::clone(&*DEFAULT_WORDS))
    }

    pub fn parse_words(s: &str) -> HashSet<String> {
        s.split_whitespace()
            .filter_map(|word| normalize(word).ok())
            .collect()
    }

    pub fn load_words(path: impl AsRef<Path>) -> anyhow::Result<HashSet<String>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Reading word list {}", path.display()))?;
        Ok(WordLadder::parse_words(&contents))
    }
}

fn normalize(word: &str) -> anyhow::Result<String> {
    if word.is_empty() {
        anyhow::bail!("Empty word");
    }
    if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        anyhow::bail!("Unexpected character {:?} in {:?}", c, word);
    }
    Ok(word.to_ascii_lowercase())
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl Puzzle for WordLadder {
    fn extensions(&self) -> Vec<Self> {
        let mut result = Vec::new();
        let mut candidate = self.from.clone().into_bytes();

        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                // Only ascii letters are ever written.
                let word = String::from_utf8_lossy(&candidate);
                if self.words.contains(&*word) {
                    result.push(WordLadder {
                        from: word.into_owned(),
                        to: self.to.clone(),
                        words: Arc::clone(&self.words),
                    });
                }
            }
            candidate[i] = original;
        }

        result
    }

    fn is_solved(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn froms(puzzles: Vec<WordLadder>) -> Vec<String> {
        puzzles.into_iter().map(|p| p.from).collect()
    }

    #[test]
    fn extensions_differ_by_one_letter() {
        let words = Arc::new(WordLadder::parse_words("cold cord bold card colt"));
        let puzzle = WordLadder::new("cold", "warm", words).unwrap();

        assert_eq!(froms(puzzle.extensions()), vec!["bold", "cord", "colt"]);
    }

    #[test]
    fn extensions_skip_unknown_words() {
        let words = Arc::new(WordLadder::parse_words("cold"));
        let puzzle = WordLadder::new("cold", "warm", words).unwrap();

        assert!(puzzle.extensions().is_empty());
    }

    #[test]
    fn lowercases_input() {
        let puzzle = WordLadder::with_default_words("COLD", "Warm").unwrap();
        assert_eq!(puzzle.signature(), "cold -> warm");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(WordLadder::with_default_words("cold", "warmer").is_err());
    }

    #[test]
    fn rejects_non_letters() {
        assert!(WordLadder::with_default_words("c0ld", "warm").is_err());
    }

    #[test]
    fn solved_when_words_match() {
        assert!(WordLadder::with_default_words("warm", "warm")
            .unwrap()
            .is_solved());
    }

    #[test]
    fn parse_words_drops_invalid_entries() {
        let words = WordLadder::parse_words("Cold it's warm");
        assert_eq!(words.len(), 2);
        assert!(words.contains("cold"));
        assert!(words.contains("warm"));
    }

    #[test]
    fn load_words_reports_missing_file() {
        assert!(WordLadder::load_words("/definitely/not/a/word/list").is_err());
    }
}
