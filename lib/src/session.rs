use crate::cache::{CacheLookup, OpeningCache};
use crate::data::WordBank;
use crate::pool::CandidatePool;
use crate::results::{get_result_for_guess, GameResult, GuessResult, LetterResult, SolverError};
use crate::scorers::{select_best_guess, MinExpectedPoolScorer};
use std::result::Result;
use std::sync::Arc;

/// Which words may be submitted as guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFrom {
    /// Guess from the full valid-guess list, even words that can't be the answer.
    AllWords,
    /// Only guess words that may still be the objective (hard mode).
    PossibleWords,
}

/// Immutable configuration for a [`SolverSession`].
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// The fixed first guess of every game.
    pub opening_word: Arc<str>,
    pub guess_from: GuessFrom,
    /// The number of guesses after which the session gives up.
    pub max_turns: u32,
    /// An optional precomputed second-guess table for `opening_word`.
    pub opening_cache: Option<OpeningCache>,
}

impl SolverConfig {
    /// Creates a config with the given opening word, guessing from all words, a 20-turn
    /// cap, and no opening cache.
    pub fn new(opening_word: &str) -> SolverConfig {
        SolverConfig {
            opening_word: Arc::from(opening_word),
            guess_from: GuessFrom::AllWords,
            max_turns: 20,
            opening_cache: None,
        }
    }
}

/// Where a session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The opening guess has not been emitted yet.
    AwaitingFirstGuess,
    /// A guess is outstanding and the session needs its feedback.
    AwaitingFeedback,
    /// The objective was found. Terminal.
    Solved,
    /// The turn cap was reached without finding the objective. Terminal.
    Failed,
}

/// The session's reaction to a round of feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The next word to guess.
    NextGuess(Arc<str>),
    /// The feedback was a win; the session is over.
    Solved,
    /// The turn cap was hit; the session is over.
    Failed,
}

/// Plays one game of Wordle from the solver's side.
///
/// A session owns its candidate pool and drives the turn cycle: emit the fixed opening
/// guess, then repeatedly narrow the pool with the received feedback and select the guess
/// that minimizes the expected remaining pool size, until the feedback is a win or the turn
/// cap is hit.
#[derive(Debug)]
pub struct SolverSession {
    config: SolverConfig,
    guess_bank: WordBank,
    pool: CandidatePool,
    state: SessionState,
    num_guesses: u32,
    last_guess: Option<Arc<str>>,
}

impl SolverSession {
    /// Constructs a session guessing from `guesses` to find a word from `answers`.
    ///
    /// `answers` should be a subset of `guesses`, and the configured opening word must be a
    /// legal guess.
    pub fn new(
        config: SolverConfig,
        answers: &WordBank,
        guesses: &WordBank,
    ) -> Result<SolverSession, SolverError> {
        if answers.word_length() != guesses.word_length() {
            return Err(SolverError::InvalidWordList);
        }
        if !guesses.contains(&config.opening_word) {
            return Err(SolverError::UnknownWord(Box::from(
                config.opening_word.as_ref(),
            )));
        }
        Ok(SolverSession {
            guess_bank: guesses.clone(),
            pool: CandidatePool::new(answers),
            state: SessionState::AwaitingFirstGuess,
            num_guesses: 0,
            last_guess: None,
            config,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The words that may still be the objective.
    pub fn possible_words(&self) -> &[Arc<str>] {
        self.pool.possible_words()
    }

    /// Emits the fixed opening guess and starts the turn cycle.
    pub fn get_first_guess(&mut self) -> Result<Arc<str>, SolverError> {
        if self.state != SessionState::AwaitingFirstGuess {
            return Err(SolverError::InvalidSessionState);
        }
        let guess = Arc::clone(&self.config.opening_word);
        self.state = SessionState::AwaitingFeedback;
        self.num_guesses = 1;
        self.last_guess = Some(Arc::clone(&guess));
        Ok(guess)
    }

    /// Incorporates the feedback for the last emitted guess and determines what happens
    /// next: the next guess to play, or a terminal outcome.
    ///
    /// Fails with [`SolverError::MalformedFeedback`] if `results` doesn't provide exactly
    /// one result per letter of the last guess, and with
    /// [`SolverError::EmptyCandidatePool`] if the feedback is inconsistent with every
    /// remaining candidate.
    pub fn get_guess(&mut self, results: &[LetterResult]) -> Result<TurnOutcome, SolverError> {
        if self.state != SessionState::AwaitingFeedback {
            return Err(SolverError::InvalidSessionState);
        }
        let Some(guess) = self.last_guess.clone() else {
            return Err(SolverError::InvalidSessionState);
        };
        if results.len() != guess.chars().count() {
            return Err(SolverError::MalformedFeedback {
                guess: Box::from(guess.as_ref()),
            });
        }
        let result = GuessResult {
            guess: &guess,
            results: results.to_vec(),
        };
        if result.is_win() {
            self.state = SessionState::Solved;
            return Ok(TurnOutcome::Solved);
        }
        self.pool.filter(&result)?;
        if self.num_guesses >= self.config.max_turns {
            self.state = SessionState::Failed;
            return Ok(TurnOutcome::Failed);
        }
        let next_guess = self.select_next_guess(&result)?;
        self.num_guesses += 1;
        self.last_guess = Some(Arc::clone(&next_guess));
        Ok(TurnOutcome::NextGuess(next_guess))
    }

    fn select_next_guess(&self, last_result: &GuessResult) -> Result<Arc<str>, SolverError> {
        // The opening cache only applies on the turn right after the opening guess, and
        // only when guessing from the full list; hard mode's guess list depends on the
        // pool, so its second guess can't be precomputed once.
        if self.num_guesses == 1 && self.config.guess_from == GuessFrom::AllWords {
            if let Some(cache) = &self.config.opening_cache {
                if cache.opening_word() == self.config.opening_word.as_ref() {
                    if let CacheLookup::Hit(word) =
                        cache.resolve_second_guess(last_result.signature())
                    {
                        return Ok(word);
                    }
                }
            }
        }
        let scorer = MinExpectedPoolScorer::new(&self.pool);
        let guess_list: &[Arc<str>] = match self.config.guess_from {
            GuessFrom::AllWords => &self.guess_bank,
            GuessFrom::PossibleWords => self.pool.possible_words(),
        };
        select_best_guess(guess_list, &scorer)
    }
}

/// Attempts to guess the given word within the session's turn cap.
pub fn play_game(
    objective: &str,
    mut session: SolverSession,
) -> Result<GameResult, SolverError> {
    if !session.pool.contains(objective) {
        return Ok(GameResult::UnknownWord);
    }
    let mut guesses: Vec<Box<str>> = Vec::new();
    let mut guess = session.get_first_guess()?;
    loop {
        guesses.push(Box::from(guess.as_ref()));
        let result = get_result_for_guess(objective, &guess)?;
        if result.is_win() {
            return Ok(GameResult::Success(guesses));
        }
        match session.get_guess(&result.results)? {
            TurnOutcome::NextGuess(next_guess) => guess = next_guess,
            TurnOutcome::Solved => return Ok(GameResult::Success(guesses)),
            TurnOutcome::Failed => return Ok(GameResult::Failure(guesses)),
        }
    }
}
