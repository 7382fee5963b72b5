use assert_matches::assert_matches;
use std::collections::HashSet;
use wordle_onestep_solver::*;

#[test]
fn get_result_for_guess_marks_misplaced_letters() {
    let result = get_result_for_guess("piano", "amino").unwrap();

    assert_eq!(
        result.results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::Correct,
        ]
    );
}

#[test]
fn get_result_for_guess_consumes_duplicate_letters() {
    // Exact matches claim their letters first, then misplaced letters are satisfied left to
    // right from whatever remains.
    let result = get_result_for_guess("aabbb", "aaaab").unwrap();

    assert_eq!(
        result.results,
        vec![
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );

    let result = get_result_for_guess("treat", "total").unwrap();

    assert_eq!(
        result.results,
        vec![
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
        ]
    );
}

#[test]
fn get_result_for_guess_is_a_win_iff_guess_equals_objective() {
    for word in ["haste", "sassy", "треск"] {
        let result = get_result_for_guess(word, word).unwrap();
        assert!(result.is_win());
    }

    let result = get_result_for_guess("haste", "hasty").unwrap();
    assert!(!result.is_win());
}

#[test]
fn get_result_for_guess_rejects_unequal_lengths() {
    assert_matches!(
        get_result_for_guess("haste", "hastes"),
        Err(SolverError::UnequalGuessLength {
            expected_length: 5,
            ..
        })
    );
}

#[test]
fn signatures_are_injective_over_all_patterns() {
    let mut signatures: HashSet<FeedbackSignature> = HashSet::new();
    // Every ternary pattern of length 5.
    for mut pattern_index in 0..3u32.pow(5) {
        let mut results = Vec::with_capacity(5);
        for _ in 0..5 {
            results.push(match pattern_index % 3 {
                0 => LetterResult::NotPresent,
                1 => LetterResult::PresentNotHere,
                _ => LetterResult::Correct,
            });
            pattern_index /= 3;
        }
        signatures.insert(FeedbackSignature::from_results(&results));
    }

    assert_eq!(signatures.len(), 3usize.pow(5));
}

#[test]
fn win_signature_matches_a_winning_result() {
    let result = get_result_for_guess("haste", "haste").unwrap();

    assert_eq!(result.signature(), FeedbackSignature::win(5));
    assert_ne!(
        get_result_for_guess("haste", "hasty").unwrap().signature(),
        FeedbackSignature::win(5)
    );
}
