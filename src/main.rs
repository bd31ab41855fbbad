//! Wordle Heuristic CLI
//!
//! Runs the letter-frequency solver against one hidden word or a batch of
//! them and prints the guesses it made.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_heuristic::trials::{DEFAULT_HIDDEN_WORDS, DEFAULT_SUCCESS_THRESHOLD};
use wordle_heuristic::{
    load_word_list, rank_guesses, run_trials, run_trials_parallel, Attempt, SolverConfig,
    TrialConfig, TrialReport, Word, WordleSolver, RULES_TEXT,
};

#[derive(Parser)]
#[clap(name = "wordle-heuristic", version, about)]
struct Options {
    /// more log output (repeat for debug)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SolverArgs {
    /// word list file, one five-letter word per line
    #[clap(short, long)]
    words: PathBuf,

    /// first guess of every trial
    #[clap(long)]
    opening: Option<Word>,

    /// give up on a trial after this many attempts (0 for no limit)
    #[clap(long)]
    max_attempts: Option<usize>,
}

impl SolverArgs {
    fn build_solver(&self) -> Result<WordleSolver> {
        let words = load_word_list(&self.words)
            .with_context(|| format!("could not load word list {}", self.words.display()))?;

        let mut config = SolverConfig::default();
        if let Some(opening) = self.opening {
            config = config.with_opening(opening);
        }
        if let Some(limit) = self.max_attempts {
            config = config.with_max_attempts((limit > 0).then_some(limit));
        }

        Ok(WordleSolver::new(words, config))
    }
}

#[derive(Subcommand)]
enum Command {
    /// solve a single hidden word
    Solve {
        hidden: Word,

        #[clap(flatten)]
        solver: SolverArgs,
    },

    /// solve a batch of hidden words and summarise the results
    Trials {
        #[clap(flatten)]
        solver: SolverArgs,

        /// hidden words (repeat once per word); defaults to the built-in list
        #[clap(long)]
        hidden: Vec<Word>,

        /// only run the first N hidden words
        #[clap(short, long)]
        count: Option<usize>,

        /// attempts within which a trial counts as a success
        #[clap(short, long, default_value_t = DEFAULT_SUCCESS_THRESHOLD)]
        threshold: usize,

        /// run trials on all cores; per-attempt lines are not printed
        #[clap(short, long)]
        parallel: bool,
    },

    /// list the best-scoring guesses over the whole word list
    Suggest {
        #[clap(short, long)]
        words: PathBuf,

        #[clap(short, long, default_value_t = 5)]
        top: usize,
    },

    /// print the game instructions
    Rules,
}

fn print_attempt(attempt: &Attempt) {
    println!(
        "Attempt {}: Guess = {}, Feedback = {}",
        attempt.number, attempt.guess, attempt.feedback
    );
}

fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(Word::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn solve(hidden: Word, args: &SolverArgs) -> Result<()> {
    let solver = args.build_solver()?;

    println!("Solving for: {}", hidden.to_string().to_uppercase());
    println!();

    let solution = solver
        .solve_with_observer(&hidden, print_attempt)
        .with_context(|| format!("could not solve for {hidden}"))?;

    println!();
    println!(
        "Guessed the word correctly in {} attempt(s)!",
        solution.attempts
    );
    println!("Guess path: {}", format_path(&solution.path));
    Ok(())
}

fn print_report(report: &TrialReport) {
    let attempts: Vec<String> = report
        .attempts_per_trial()
        .iter()
        .map(|a| a.map_or_else(|| "-".to_string(), |a| a.to_string()))
        .collect();

    println!();
    println!(
        "Accuracy: {:.1}% of trials found the word within {} guesses.",
        report.accuracy(),
        report.config.success_threshold
    );
    println!("Attempts per trial: [{}]", attempts.join(", "));
    if let Some(average) = report.average_attempts() {
        println!("Average attempts: {:.3}", average);
    }
    if report.failures() > 0 {
        println!("Trials that could not be solved: {}", report.failures());
    }

    let distribution = report.distribution();
    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    if total > 0 {
        println!();
        println!("Attempt distribution:");
        for (attempts, count) in &distribution {
            let pct = *count as f64 / total as f64 * 100.0;
            let bar = "█".repeat((*count * 40 / total).max(1));
            println!("  {:>3} attempts: {:>5} ({:>5.1}%) {}", attempts, count, pct, bar);
        }
    }
}

fn trials(
    args: &SolverArgs,
    hidden: Vec<Word>,
    count: Option<usize>,
    threshold: usize,
    parallel: bool,
) -> Result<()> {
    let solver = args.build_solver()?;

    let mut hidden_words = if hidden.is_empty() {
        DEFAULT_HIDDEN_WORDS
            .iter()
            .map(|w| w.parse())
            .collect::<Result<Vec<Word>, _>>()?
    } else {
        hidden
    };
    if let Some(count) = count {
        if count > hidden_words.len() {
            bail!(
                "asked for {count} trials but only {} hidden words are available",
                hidden_words.len()
            );
        }
        hidden_words.truncate(count);
    }

    let config = TrialConfig {
        success_threshold: threshold,
    };

    let report = if parallel {
        let start = std::time::Instant::now();
        let report = run_trials_parallel(&solver, &hidden_words, config);
        for (i, outcome) in report.outcomes.iter().enumerate() {
            match &outcome.result {
                Ok(solution) => println!(
                    "Trial {} ({}): {} attempt(s), path {}",
                    i + 1,
                    outcome.hidden,
                    solution.attempts,
                    format_path(&solution.path)
                ),
                Err(err) => println!("Trial {} ({}): failed, {}", i + 1, outcome.hidden, err),
            }
        }
        println!("Time elapsed: {:.2?}", start.elapsed());
        report
    } else {
        run_trials(&solver, &hidden_words, config, |i, hidden, attempt| {
            if attempt.number == 1 {
                println!();
                println!("Trial {} with hidden word: {}", i + 1, hidden);
            }
            print_attempt(attempt);
            if attempt.feedback.is_win() {
                println!(
                    "Guessed the word correctly in {} attempt(s)!",
                    attempt.number
                );
            }
        })
    };

    print_report(&report);
    Ok(())
}

fn suggest(words: &Path, top: usize) -> Result<()> {
    let words = load_word_list(words)
        .with_context(|| format!("could not load word list {}", words.display()))?;

    let ranked = rank_guesses(&words, top);
    if ranked.is_empty() {
        bail!("word list is empty");
    }

    println!("{:>4} {:>8} {:>8}", "#", "Word", "Score");
    println!("{}", "-".repeat(22));
    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8}",
            i + 1,
            guess.word.to_string().to_uppercase(),
            guess.score
        );
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(opts.verbose);

    match opts.command {
        Command::Solve { hidden, solver } => solve(hidden, &solver),
        Command::Trials {
            solver,
            hidden,
            count,
            threshold,
            parallel,
        } => trials(&solver, hidden, count, threshold, parallel),
        Command::Suggest { words, top } => suggest(&words, top),
        Command::Rules => {
            println!("{}", RULES_TEXT);
            Ok(())
        }
    }
}
