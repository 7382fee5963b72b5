use crate::pool::CandidatePool;
use crate::results::{get_result_for_guess, FeedbackSignature, SolverError};
use rayon::prelude::*;
use std::collections::HashMap;
use std::result::Result;
use std::sync::Arc;

/// Gives guesses a score, where the minimum score indicates the best guess.
pub trait WordScorer {
    /// Determines a score for the given guess. The lower the score, the better the guess.
    fn score_word(&self, word: &str) -> Result<i64, SolverError>;
}

/// Scores a guess by how concentrated the candidate pool is expected to stay after the
/// guess's feedback is revealed.
///
/// The pool is partitioned by the feedback signature the guess would produce against each
/// candidate, giving group sizes `n_1..n_k`. The score is `sum(n_i^2)`: with the objective
/// uniformly distributed over the pool, the expected post-feedback pool size is
/// `sum(n_i^2) / |pool|`, and the constant denominator doesn't change which guess is
/// smallest. A guess that is itself still a candidate scores one less than the raw sum,
/// which keeps potential answers competitive with pure probe words despite their forced
/// all-`Correct` singleton group.
#[derive(Debug, Clone)]
pub struct MinExpectedPoolScorer<'a> {
    possible_words: &'a [Arc<str>],
}

impl<'a> MinExpectedPoolScorer<'a> {
    /// Constructs a scorer for the current state of the given pool.
    pub fn new(pool: &'a CandidatePool) -> MinExpectedPoolScorer<'a> {
        MinExpectedPoolScorer {
            possible_words: pool.possible_words(),
        }
    }
}

impl WordScorer for MinExpectedPoolScorer<'_> {
    fn score_word(&self, word: &str) -> Result<i64, SolverError> {
        let mut group_sizes: HashMap<FeedbackSignature, i64> = HashMap::new();
        let mut word_is_candidate = false;
        for candidate in self.possible_words {
            let result = get_result_for_guess(candidate, word)?;
            *group_sizes.entry(result.signature()).or_insert(0) += 1;
            word_is_candidate = word_is_candidate || candidate.as_ref() == word;
        }
        let mut score = group_sizes.into_values().map(|size| size * size).sum();
        if word_is_candidate {
            score -= 1;
        }
        Ok(score)
    }
}

/// Selects the guess with the lowest score from the given guess list.
///
/// Scoring each guess is independent of the others, so the list is scored in parallel, but
/// the winner is reduced in list order: only a strictly smaller score replaces the current
/// best, so ties keep the earliest word and selection stays deterministic for a fixed list.
pub fn select_best_guess<S>(guess_list: &[Arc<str>], scorer: &S) -> Result<Arc<str>, SolverError>
where
    S: WordScorer + Sync,
{
    if guess_list.is_empty() {
        return Err(SolverError::SelectorExhausted);
    }
    let scores = guess_list
        .par_iter()
        .map(|word| scorer.score_word(word))
        .collect::<Result<Vec<i64>, SolverError>>()?;
    let mut best_index = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score < scores[best_index] {
            best_index = index;
        }
    }
    Ok(Arc::clone(&guess_list[best_index]))
}
