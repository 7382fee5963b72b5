use assert_matches::assert_matches;
use std::collections::HashSet;
use wordle_onestep_solver::*;

fn create_pool(words: Vec<&str>) -> CandidatePool {
    CandidatePool::new(&WordBank::from_iterator(words).unwrap())
}

#[test]
fn filter_never_evicts_the_true_objective() {
    let words = vec!["alpha", "allot", "begot", "below", "endow", "ingot"];
    for objective in &words {
        for guess in &words {
            let mut pool = create_pool(words.clone());
            let result = get_result_for_guess(objective, guess).unwrap();

            pool.filter(&result).unwrap();

            assert!(
                pool.contains(objective),
                "{} was evicted by its own feedback for guess {}",
                objective,
                guess
            );
        }
    }
}

#[test]
fn filter_removes_every_inconsistent_word() {
    let words = vec!["alpha", "allot", "begot", "below", "endow", "ingot"];
    let mut pool = create_pool(words.clone());
    let observed = get_result_for_guess("endow", "begot").unwrap();

    pool.filter(&observed).unwrap();

    for word in &words {
        let would_be = get_result_for_guess(word, "begot").unwrap();
        assert_eq!(
            pool.contains(word),
            would_be.signature() == observed.signature(),
            "wrong filtering decision for {}",
            word
        );
    }
}

#[test]
fn filter_only_shrinks_the_pool() {
    let mut pool = create_pool(vec!["alpha", "allot", "begot", "below", "endow", "ingot"]);
    let mut previous_len = pool.len();

    for result in [
        get_result_for_guess("endow", "allot").unwrap(),
        get_result_for_guess("endow", "below").unwrap(),
    ] {
        pool.filter(&result).unwrap();
        assert!(pool.len() <= previous_len);
        previous_len = pool.len();
    }
}

#[test]
fn filter_surfaces_an_emptied_pool() {
    let mut pool = create_pool(vec!["alpha", "allot"]);
    // Feedback claiming 'begot' was entirely correct is inconsistent with both words.
    let impossible = GuessResult {
        guess: "begot",
        results: vec![LetterResult::Correct; 5],
    };

    assert_matches!(
        pool.filter(&impossible),
        Err(SolverError::EmptyCandidatePool)
    );
}

#[test]
fn filter_rejects_guesses_of_the_wrong_length() {
    let mut pool = create_pool(vec!["alpha", "allot"]);
    let result = get_result_for_guess("word", "word").unwrap();

    assert_matches!(
        pool.filter(&result),
        Err(SolverError::UnequalGuessLength { .. })
    );
}

#[test]
fn filter_is_a_noop_only_for_uninformative_guesses() {
    // A guess sharing no letters with any candidate gives every word the same feedback,
    // so filtering by it keeps the pool at full size.
    let mut pool = create_pool(vec!["abc", "abd"]);
    let uninformative = get_result_for_guess("abc", "zzz").unwrap();

    pool.filter(&uninformative).unwrap();

    assert_eq!(pool.len(), 2);
    let signatures: HashSet<FeedbackSignature> = pool
        .possible_words()
        .iter()
        .map(|word| get_result_for_guess(word, "zzz").unwrap().signature())
        .collect();
    assert_eq!(signatures.len(), 1);

    // A guess that splits the surviving words strictly shrinks the pool.
    let informative = get_result_for_guess("abd", "abc").unwrap();

    pool.filter(&informative).unwrap();

    assert_eq!(pool.len(), 1);
    assert!(pool.contains("abd"));
}
