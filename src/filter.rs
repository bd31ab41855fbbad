//! Narrowing the candidate set with observed feedback.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;

/// Returns whether `candidate` could still be the hidden word after `guess`
/// produced `pattern`.
pub fn is_consistent(candidate: &Word, guess: &Word, pattern: FeedbackPattern) -> bool {
    let letters = candidate.letters();

    guess
        .letters()
        .iter()
        .zip(pattern.to_feedbacks())
        .enumerate()
        .all(|(i, (&g, fb))| match fb {
            Feedback::Hit => letters[i] == g,
            // present means "somewhere, but not here"
            Feedback::Present => candidate.contains(g) && letters[i] != g,
            Feedback::Miss => !candidate.contains(g),
        })
}

/// Keep the candidates consistent with `guess` and `pattern`, in their
/// original order.
pub fn filter_candidates(guess: &Word, pattern: FeedbackPattern, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, guess, pattern))
        .copied()
        .collect()
}
