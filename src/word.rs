//! Five-letter word value type.

use std::fmt;
use std::str::FromStr;

use crate::error::WordleError;
use crate::WORD_LENGTH;

/// A validated, lowercase, five-letter ASCII word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Build a word from bytes already known to be lowercase ASCII letters.
    pub(crate) const fn from_ascii(letters: [u8; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Letters of the word as ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII lowercase letters get past `from_str`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Letters of the word with repeats removed, in first-occurrence order.
    pub fn unique_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(i, c)| !self.0[..*i].contains(c))
            .map(|(_, &c)| c)
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letters: [u8; WORD_LENGTH] = trimmed
            .as_bytes()
            .try_into()
            .map_err(|_| WordleError::malformed(trimmed, None))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordleError::malformed(trimmed, None));
        }

        Ok(Self(letters.map(|c| c.to_ascii_lowercase())))
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
