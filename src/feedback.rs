//! Feedback calculation for guesses.
//!
//! This module handles computing the per-position feedback (hit/present/miss)
//! for a guess against a hidden word.

use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position
    Hit,
    /// Letter occurs in the hidden word, but elsewhere
    Present,
    /// Letter does not occur in the hidden word
    Miss,
}

impl Feedback {
    /// Convert to a symbol for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '✔',
            Feedback::Present => '➕',
            Feedback::Miss => '❌',
        }
    }

    /// Parse from a character (h=hit, p=present, m=miss, or 2/1/0)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' | '2' | '✔' => Some(Feedback::Hit),
            'p' | '1' | '➕' => Some(Feedback::Present),
            'm' | '0' | '❌' => Some(Feedback::Miss),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Each position can be 0 (miss), 1 (present), or 2 (hit).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all hits (winning)
    pub const ALL_HIT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Miss => 0,
                Feedback::Present => 1,
                Feedback::Hit => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against a hidden word.
    ///
    /// - Hit: the letter matches the hidden word at this position
    /// - Present: the letter occurs anywhere else in the hidden word
    /// - Miss: the letter does not occur in the hidden word
    ///
    /// Repeated letters are not rationed: every copy of a guess letter that
    /// occurs in the hidden word is marked present, unlike the official game.
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        let mut feedback = [Feedback::Miss; WORD_LENGTH];

        for (i, (&g, &h)) in guess.letters().iter().zip(hidden.letters()).enumerate() {
            feedback[i] = if g == h {
                Feedback::Hit
            } else if hidden.contains(g) {
                Feedback::Present
            } else {
                Feedback::Miss
            };
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Miss,
                1 => Feedback::Present,
                _ => Feedback::Hit,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all hits)
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse a pattern from a string like "hpmmm" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }

    /// Display as a symbol string
    pub fn to_symbol_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_symbol_string())
    }
}
