use wordle_heuristic::solver::{DEFAULT_MAX_ATTEMPTS, DEFAULT_OPENING};
use wordle_heuristic::{
    Attempt, Feedback, FeedbackPattern, SolverConfig, Word, WordleError, WordleSolver,
};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

fn get_test_words() -> Vec<Word> {
    words(&[
        "rossa", "jetty", "wizzo", "cuppa", "cohoe", "gurks", "squad", "beisa", "shrug", "fossa",
        "fluyt", "camus", "speed", "mamil", "array", "polio", "barns", "panes", "souts", "limas",
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

#[test]
fn test_default_config() {
    let config = SolverConfig::default();
    assert_eq!(config.opening, word("biome"));
    assert_eq!(config.opening, DEFAULT_OPENING);
    assert_eq!(config.max_attempts, Some(DEFAULT_MAX_ATTEMPTS));
}

#[test]
fn test_opening_guess_wins_immediately() {
    let config = SolverConfig::default().with_opening(word("array"));
    let solver = WordleSolver::new(get_test_words(), config);

    let solution = solver.solve(&word("array")).unwrap();

    assert_eq!(solution.attempts, 1);
    assert_eq!(solution.path, vec![word("array")]);
    assert_eq!(solution.history, vec![(word("array"), FeedbackPattern::ALL_HIT)]);
}

#[test]
fn test_solve_array_from_biome() {
    let candidates = words(&["array", "crane", "sharp", "lucky", "start"]);
    let solver = WordleSolver::new(candidates, SolverConfig::default());

    let mut attempts: Vec<Attempt> = Vec::new();
    let solution = solver
        .solve_with_observer(&word("array"), |a| attempts.push(a.clone()))
        .unwrap();

    assert_eq!(solution.attempts, 3);
    assert_eq!(solution.path, words(&["biome", "sharp", "array"]));

    assert_eq!(attempts.len(), 3);
    assert_eq!(attempts[0].feedback, FeedbackPattern::new([Feedback::Miss; 5]));
    // crane is the only candidate with a letter of "biome"
    assert_eq!(attempts[0].remaining, 4);
    assert_eq!(attempts[1].feedback, FeedbackPattern::parse("mmppm").unwrap());
    assert_eq!(attempts[1].remaining, 1);
    assert!(attempts[2].feedback.is_win());
}

#[test]
fn test_solve_every_word() {
    let candidates = get_test_words();
    let solver = WordleSolver::new(candidates.clone(), SolverConfig::default());

    for hidden in &candidates {
        let solution = solver.solve(hidden).unwrap();

        assert!(solution.attempts >= 1);
        assert_eq!(solution.attempts, solution.path.len());
        assert_eq!(solution.history.len(), solution.path.len());
        assert_eq!(solution.path.first(), Some(&word("biome")));
        assert_eq!(solution.path.last(), Some(hidden), "wrong final guess for {}", hidden);

        // a non-winning guess is always filtered out, so it never repeats
        let mut seen = solution.path.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), solution.path.len());
    }
}

#[test]
fn test_observer_sees_every_attempt() {
    let candidates = get_test_words();
    let solver = WordleSolver::new(candidates, SolverConfig::default());

    let mut attempts: Vec<Attempt> = Vec::new();
    let solution = solver
        .solve_with_observer(&word("toast"), |a| attempts.push(a.clone()))
        .unwrap();

    assert_eq!(attempts.len(), solution.attempts);
    for (i, attempt) in attempts.iter().enumerate() {
        assert_eq!(attempt.number, i + 1);
        assert_eq!(attempt.guess, solution.path[i]);
        assert_eq!(attempt.feedback, solution.history[i].1);
    }
    assert!(attempts
        .windows(2)
        .all(|pair| pair[1].remaining <= pair[0].remaining));
    assert!(attempts.last().unwrap().feedback.is_win());
}

#[test]
fn test_solving_does_not_change_solver() {
    let candidates = get_test_words();
    let solver = WordleSolver::new(candidates.clone(), SolverConfig::default());

    let first = solver.solve(&word("speed")).unwrap();
    let second = solver.solve(&word("speed")).unwrap();

    assert_eq!(first, second);
    assert_eq!(solver.words(), candidates.as_slice());
}

#[test]
fn test_hidden_word_missing_from_candidates() {
    let solver = WordleSolver::new(words(&["crane", "sharp"]), SolverConfig::default());

    let err = solver.solve(&word("array")).unwrap_err();

    assert!(
        matches!(err, WordleError::EmptyCandidateSet { attempt: 2, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_empty_word_list() {
    let solver = WordleSolver::new(Vec::new(), SolverConfig::default());

    let err = solver.solve(&word("array")).unwrap_err();

    assert!(matches!(err, WordleError::EmptyCandidateSet { attempt: 1, .. }));
}

#[test]
fn test_attempt_limit() {
    let config = SolverConfig::default().with_max_attempts(Some(1));
    let solver = WordleSolver::new(words(&["array", "sharp"]), config);

    let err = solver.solve(&word("array")).unwrap_err();

    assert!(matches!(err, WordleError::AttemptLimitExceeded { limit: 1, .. }));
}

#[test]
fn test_attempt_limit_allows_exact_count() {
    let candidates = words(&["array", "crane", "sharp", "lucky", "start"]);
    let config = SolverConfig::default().with_max_attempts(Some(3));
    let solver = WordleSolver::new(candidates, config);

    assert_eq!(solver.solve(&word("array")).unwrap().attempts, 3);
}

#[test]
fn test_no_attempt_limit() {
    let config = SolverConfig::default().with_max_attempts(None);
    let solver = WordleSolver::new(get_test_words(), config);

    let solution = solver.solve(&word("wizzo")).unwrap();
    assert_eq!(solution.path.last(), Some(&word("wizzo")));
}
