//! Batch runs of the solver over a list of hidden words.

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::solver::{Attempt, Solution, WordleSolver};
use crate::word::Word;

/// Attempts within which a trial counts as a success when none is configured.
pub const DEFAULT_SUCCESS_THRESHOLD: usize = 6;

/// Hidden words used by the `trials` command when none are given.
pub const DEFAULT_HIDDEN_WORDS: [&str; 20] = [
    "rossa", "jetty", "wizzo", "cuppa", "cohoe", "gurks", "squad", "beisa", "shrug", "fossa",
    "fluyt", "camus", "speed", "mamil", "array", "polio", "barns", "panes", "souts", "limas",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub success_threshold: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
        }
    }
}

#[derive(Debug)]
pub struct TrialOutcome {
    pub hidden: Word,
    pub result: Result<Solution>,
}

impl TrialOutcome {
    pub fn attempts(&self) -> Option<usize> {
        self.result.as_ref().ok().map(|solution| solution.attempts)
    }
}

/// Outcomes of a batch, in the order the hidden words were given.
#[derive(Debug)]
pub struct TrialReport {
    pub outcomes: Vec<TrialOutcome>,
    pub config: TrialConfig,
}

impl TrialReport {
    pub fn trials(&self) -> usize {
        self.outcomes.len()
    }

    /// Trials solved within the success threshold.
    pub fn successes(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(TrialOutcome::attempts)
            .filter(|&attempts| attempts <= self.config.success_threshold)
            .count()
    }

    /// Trials that ended in an error instead of a solution.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Percentage of successful trials, 0 for an empty batch.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.successes() as f64 / self.trials() as f64 * 100.0
    }

    pub fn attempts_per_trial(&self) -> Vec<Option<usize>> {
        self.outcomes.iter().map(TrialOutcome::attempts).collect()
    }

    /// Mean attempts over the solved trials.
    pub fn average_attempts(&self) -> Option<f64> {
        let solved: Vec<usize> = self.outcomes.iter().filter_map(TrialOutcome::attempts).collect();
        if solved.is_empty() {
            return None;
        }
        Some(solved.iter().sum::<usize>() as f64 / solved.len() as f64)
    }

    /// `(attempts, trials)` pairs for every attempt count that occurred.
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        let counts: Vec<usize> = self.outcomes.iter().filter_map(TrialOutcome::attempts).collect();

        let max_attempts = *counts.iter().max().unwrap_or(&0);
        let mut distribution = vec![0usize; max_attempts + 1];

        for count in counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn log_summary(&self) {
        info!(
            "{} trials: {} within {} attempts, {} failed",
            self.trials(),
            self.successes(),
            self.config.success_threshold,
            self.failures()
        );
    }
}

fn record(hidden: Word, result: Result<Solution>) -> TrialOutcome {
    match &result {
        Ok(solution) => info!("{hidden}: solved in {} attempts", solution.attempts),
        Err(err) => warn!("{hidden}: {err}"),
    }
    TrialOutcome { hidden, result }
}

/// Run one trial per hidden word, one after another.
///
/// `observer` receives the trial index, hidden word and each attempt.
pub fn run_trials<F>(
    solver: &WordleSolver,
    hidden_words: &[Word],
    config: TrialConfig,
    mut observer: F,
) -> TrialReport
where
    F: FnMut(usize, &Word, &Attempt),
{
    let outcomes = hidden_words
        .iter()
        .enumerate()
        .map(|(i, hidden)| {
            let result = solver.solve_with_observer(hidden, |attempt| observer(i, hidden, attempt));
            record(*hidden, result)
        })
        .collect();

    let report = TrialReport { outcomes, config };
    report.log_summary();
    report
}

/// Run one trial per hidden word across the rayon thread pool.
pub fn run_trials_parallel(
    solver: &WordleSolver,
    hidden_words: &[Word],
    config: TrialConfig,
) -> TrialReport {
    let outcomes = hidden_words
        .par_iter()
        .map(|hidden| record(*hidden, solver.solve(hidden)))
        .collect();

    let report = TrialReport { outcomes, config };
    report.log_summary();
    report
}
