//! # Wordle Heuristic
//!
//! A Wordle solver driven by a letter-frequency information heuristic.
//!
//! Starting from a fixed opening guess, the solver filters the candidate words
//! with each round of feedback and picks the next guess as the candidate whose
//! distinct letters are most common among the words that remain.

pub mod error;
pub mod feedback;
pub mod filter;
pub mod heuristic;
pub mod solver;
pub mod trials;
pub mod word;

use std::path::Path;

pub use error::{Result, WordleError};
pub use feedback::{Feedback, FeedbackPattern};
pub use filter::{filter_candidates, is_consistent};
pub use heuristic::{rank_guesses, score_word, select_best_guess, LetterFrequencies, ScoredGuess};
pub use solver::{Attempt, Solution, SolverConfig, WordleSolver};
pub use trials::{run_trials, run_trials_parallel, TrialConfig, TrialOutcome, TrialReport};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Game instructions, shown by the `rules` command
pub const RULES_TEXT: &str = include_str!("text/rules.txt");

/// Parse a word list with one word per line.
///
/// Lines are trimmed and lowercased and blank lines are skipped. Any other
/// line that is not exactly five letters is rejected with its line number.
pub fn parse_word_list(contents: &str) -> Result<Vec<Word>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Word>()
                .map_err(|_| WordleError::malformed(line.trim(), Some(i + 1)))
        })
        .collect()
}

/// Load a word list from a file, see [`parse_word_list`].
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&contents)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
