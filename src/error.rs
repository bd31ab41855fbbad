//! Error type shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

use crate::word::Word;
use crate::WORD_LENGTH;

#[derive(Error, Debug)]
pub enum WordleError {
    #[error(
        "expected a word of {expected} ASCII letters, found \"{word}\"{}",
        line.map(|l| format!(" on line {l}")).unwrap_or_default()
    )]
    MalformedWord {
        word: String,
        line: Option<usize>,
        expected: usize,
    },

    #[error("no candidates left for hidden word \"{hidden}\" after attempt {attempt}")]
    EmptyCandidateSet { hidden: Word, attempt: usize },

    #[error("hidden word \"{hidden}\" was not found within {limit} attempts")]
    AttemptLimitExceeded { hidden: Word, limit: usize },

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordleError {
    pub(crate) fn malformed(word: &str, line: Option<usize>) -> Self {
        WordleError::MalformedWord {
            word: word.to_string(),
            line,
            expected: WORD_LENGTH,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordleError>;
