use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::iter::zip;
use std::result::Result;
use thiserror::Error;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Indicates that a guess and an objective word had different lengths.
    #[error("objective and guess ({guess}) must both be {expected_length} letters long")]
    UnequalGuessLength {
        guess: Box<str>,
        expected_length: usize,
    },
    /// Indicates that the provided feedback doesn't line up with the last guess.
    #[error("feedback must provide exactly one result per letter of the guess ({guess})")]
    MalformedFeedback { guess: Box<str> },
    /// Indicates that no candidate answer is consistent with all the feedback received.
    #[error("no candidate answers remain, so some feedback must have been inconsistent")]
    EmptyCandidatePool,
    /// Indicates that a guess was requested while the guess list was empty.
    #[error("the guess list is empty")]
    SelectorExhausted,
    /// Indicates that the session has already ended, or was asked for guesses out of order.
    #[error("the session can't accept that request in its current state")]
    InvalidSessionState,
    /// Indicates that a word was not in the relevant word list.
    #[error("word ({0}) is not in the word list")]
    UnknownWord(Box<str>),
    /// Indicates that a word list held words of differing lengths, or no words at all.
    #[error("word lists must be non-empty and hold words of a single length")]
    InvalidWordList,
}

/// The result of a single word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult<'_> {
    /// Returns `true` iff every letter was guessed in the right location.
    pub fn is_win(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Returns the signature for this result's feedback pattern.
    pub fn signature(&self) -> FeedbackSignature {
        FeedbackSignature::from_results(&self.results)
    }
}

/// An integer encoding of a feedback pattern, usable as a grouping or lookup key.
///
/// Each letter result is coded as `Correct` = 2, `PresentNotHere` = 1, `NotPresent` = 0, and
/// the codes are combined as a base-4 weighted sum, so two patterns are equal iff their
/// signatures are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackSignature(pub u32);

impl FeedbackSignature {
    /// Computes the signature for the given per-letter results.
    pub fn from_results(results: &[LetterResult]) -> FeedbackSignature {
        let mut signature = 0;
        for result in results.iter().rev() {
            signature = signature * 4
                + match result {
                    LetterResult::Correct => 2,
                    LetterResult::PresentNotHere => 1,
                    LetterResult::NotPresent => 0,
                };
        }
        FeedbackSignature(signature)
    }

    /// The signature of the winning all-`Correct` pattern for the given word length.
    pub fn win(word_length: usize) -> FeedbackSignature {
        FeedbackSignature::from_results(&vec![LetterResult::Correct; word_length])
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Duplicate letters follow the standard Wordle rules: letters in the right location are
/// matched first, then remaining occurrences in the objective satisfy misplaced letters from
/// left to right. Any further repeats in the guess come back as `NotPresent`.
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, SolverError> {
    if objective.chars().count() != guess.chars().count() {
        return Err(SolverError::UnequalGuessLength {
            guess: Box::from(guess),
            expected_length: objective.chars().count(),
        });
    }
    let mut results = vec![LetterResult::NotPresent; guess.chars().count()];
    let mut unmatched_letters: HashMap<char, u32> = HashMap::new();
    for (index, (guess_letter, objective_letter)) in
        zip(guess.chars(), objective.chars()).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unmatched_letters.entry(objective_letter).or_insert(0) += 1;
        }
    }
    for (index, guess_letter) in guess.chars().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(remaining) = unmatched_letters.get_mut(&guess_letter) {
            if *remaining > 0 {
                *remaining -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }
    Ok(GuessResult { guess, results })
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Box<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}
