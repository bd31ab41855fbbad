//! The guessing loop.
//!
//! A trial starts from a fixed opening guess, then alternates between
//! filtering the candidate set with the latest feedback and picking the
//! next guess with the letter-frequency heuristic, until the hidden word is
//! guessed.

use log::debug;

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackPattern;
use crate::filter::filter_candidates;
use crate::heuristic::select_best_guess;
use crate::word::Word;

/// Opening guess used when none is configured.
pub const DEFAULT_OPENING: Word = Word::from_ascii(*b"biome");

/// Attempt cap used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub opening: Word,
    /// `None` lets the loop run until the word is found.
    pub max_attempts: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: DEFAULT_OPENING,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl SolverConfig {
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = opening;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// One guess and the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// 1-based attempt number
    pub number: usize,
    pub guess: Word,
    pub feedback: FeedbackPattern,
    /// Candidates left once this attempt's feedback was applied
    pub remaining: usize,
}

/// A finished trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub attempts: usize,
    /// Every guess made, in order; the last one is the hidden word
    pub path: Vec<Word>,
    pub history: Vec<(Word, FeedbackPattern)>,
}

/// The main solver
#[derive(Debug, Clone)]
pub struct WordleSolver {
    words: Vec<Word>,
    config: SolverConfig,
}

impl WordleSolver {
    pub fn new(words: Vec<Word>, config: SolverConfig) -> Self {
        Self { words, config }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, hidden: &Word) -> Result<Solution> {
        self.solve_with_observer(hidden, |_| {})
    }

    /// Solve for `hidden`, reporting every attempt (the winning one included)
    /// to `observer`.
    pub fn solve_with_observer<F>(&self, hidden: &Word, mut observer: F) -> Result<Solution>
    where
        F: FnMut(&Attempt),
    {
        let mut candidates = self.words.clone();
        let mut history = Vec::new();
        let mut guess = self.config.opening;

        loop {
            let number = history.len() + 1;
            if let Some(limit) = self.config.max_attempts {
                if number > limit {
                    return Err(WordleError::AttemptLimitExceeded {
                        hidden: *hidden,
                        limit,
                    });
                }
            }

            let feedback = FeedbackPattern::calculate(&guess, hidden);
            history.push((guess, feedback));

            if feedback.is_win() {
                observer(&Attempt {
                    number,
                    guess,
                    feedback,
                    remaining: candidates.len(),
                });
                debug!("{hidden}: solved with {guess} on attempt {number}");

                return Ok(Solution {
                    attempts: number,
                    path: history.iter().map(|(word, _)| *word).collect(),
                    history,
                });
            }

            candidates = filter_candidates(&guess, feedback, &candidates);
            observer(&Attempt {
                number,
                guess,
                feedback,
                remaining: candidates.len(),
            });
            debug!(
                "{hidden}: attempt {number} guessed {guess} ({feedback}), {} candidates left",
                candidates.len()
            );

            guess = select_best_guess(&candidates).ok_or(WordleError::EmptyCandidateSet {
                hidden: *hidden,
                attempt: number,
            })?;
        }
    }
}
