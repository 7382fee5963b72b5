use crate::data::WordBank;
use crate::results::{get_result_for_guess, GuessResult, SolverError};
use std::result::Result;
use std::sync::Arc;

/// The set of answer words still consistent with every piece of feedback received so far.
///
/// The pool starts as the full answer list and only ever shrinks. Words keep the order they
/// had in the originating [`WordBank`], which keeps guess selection deterministic.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    possible_words: Vec<Arc<str>>,
    word_length: usize,
}

impl CandidatePool {
    /// Creates a pool holding every word in the given bank.
    pub fn new(bank: &WordBank) -> CandidatePool {
        CandidatePool {
            possible_words: bank.to_vec(),
            word_length: bank.word_length(),
        }
    }

    /// The words that may still be the objective, in original bank order.
    pub fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }

    /// Returns the number of words still in the pool.
    pub fn len(&self) -> usize {
        self.possible_words.len()
    }

    /// Returns true iff no words remain.
    pub fn is_empty(&self) -> bool {
        self.possible_words.is_empty()
    }

    /// Returns whether the given word is still in the pool.
    pub fn contains(&self, word: &str) -> bool {
        self.possible_words
            .iter()
            .any(|known| known.as_ref() == word)
    }

    /// Removes every word that would not have produced the observed feedback if it were the
    /// objective. Words that would reproduce the feedback are always kept, so the true
    /// objective can never be evicted by its own feedback.
    ///
    /// Fails with [`SolverError::EmptyCandidatePool`] if no word survives, which means the
    /// feedback history is inconsistent with the loaded answer list.
    pub fn filter(&mut self, result: &GuessResult) -> Result<(), SolverError> {
        if result.guess.chars().count() != self.word_length {
            return Err(SolverError::UnequalGuessLength {
                guess: Box::from(result.guess),
                expected_length: self.word_length,
            });
        }
        let observed_signature = result.signature();
        self.possible_words.retain(|word| {
            get_result_for_guess(word, result.guess)
                .map_or(false, |would_be| would_be.signature() == observed_signature)
        });
        if self.possible_words.is_empty() {
            return Err(SolverError::EmptyCandidatePool);
        }
        Ok(())
    }
}
