//! Letter-frequency guess selection.
//!
//! Each candidate is scored by how many letter occurrences across the
//! remaining candidate set it covers. This is a cheap stand-in for expected
//! information gain: words built from common letters split the set more.

use crate::word::Word;

/// Result of scoring a potential guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Negated letter coverage; lower is better.
    pub score: i64,
}

/// Occurrence count of every letter across a candidate set.
///
/// Repeated letters inside one word are each counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies([u32; 26]);

impl LetterFrequencies {
    pub fn from_candidates(candidates: &[Word]) -> Self {
        let mut counts = [0u32; 26];
        for word in candidates {
            for &c in word.letters() {
                counts[(c - b'a') as usize] += 1;
            }
        }
        Self(counts)
    }

    pub fn count(&self, letter: u8) -> u32 {
        self.0[(letter - b'a') as usize]
    }

    /// Score of `word` against this table: the negated sum of the frequencies
    /// of its distinct letters.
    pub fn score(&self, word: &Word) -> i64 {
        let covered: i64 = word
            .unique_letters()
            .map(|c| i64::from(self.count(c)))
            .sum();
        -covered
    }
}

pub fn score_word(word: &Word, candidates: &[Word]) -> i64 {
    LetterFrequencies::from_candidates(candidates).score(word)
}

/// Pick the candidate with the lowest score.
///
/// Ties go to whichever candidate comes first. Returns `None` for an empty set.
pub fn select_best_guess(candidates: &[Word]) -> Option<Word> {
    let freqs = LetterFrequencies::from_candidates(candidates);

    candidates
        .iter()
        .enumerate()
        .min_by_key(|(i, word)| (freqs.score(word), *i))
        .map(|(_, word)| *word)
}

/// The `n` best candidates, best first, ordered by score then position.
pub fn rank_guesses(candidates: &[Word], n: usize) -> Vec<ScoredGuess> {
    let freqs = LetterFrequencies::from_candidates(candidates);

    let mut ranked: Vec<(usize, ScoredGuess)> = candidates
        .iter()
        .enumerate()
        .map(|(i, word)| {
            (
                i,
                ScoredGuess {
                    word: *word,
                    score: freqs.score(word),
                },
            )
        })
        .collect();

    ranked.sort_by_key(|(i, guess)| (guess.score, *i));
    ranked.truncate(n);
    ranked.into_iter().map(|(_, guess)| guess).collect()
}
