use crate::data::WordBank;
use crate::pool::CandidatePool;
use crate::results::{get_result_for_guess, FeedbackSignature, GuessResult, SolverError};
use crate::scorers::{select_best_guess, MinExpectedPoolScorer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;
use std::result::Result;
use std::sync::Arc;

/// The outcome of an opening-cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// The precomputed second guess for the observed signature.
    Hit(Arc<str>),
    /// No entry; the caller should fall back to the live selector.
    Miss,
}

/// Precomputed second guesses for a fixed opening word, keyed by the feedback signature
/// observed after that opening guess.
///
/// Scoring the whole guess list against the untouched answer pool is the most expensive
/// turn of every game, and its inputs never change for a fixed opening word, so the result
/// is computed once and persisted. The cache is purely an optimization: a miss (or no cache
/// at all) falls back to the live selector and yields the same guesses, just slower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningCache {
    opening_word: Box<str>,
    second_guesses: HashMap<u32, Box<str>>,
}

impl OpeningCache {
    /// Builds the cache for the given opening word by enumerating every answer as a
    /// possible objective.
    ///
    /// All answers that share a first-turn signature leave the solver in exactly the same
    /// position, so one representative objective per signature is enough: its feedback is
    /// replayed against a fresh pool and the live selector picks the second guess.
    pub fn build(
        opening_word: &str,
        answers: &WordBank,
        guesses: &WordBank,
    ) -> Result<OpeningCache, SolverError> {
        let mut representative_results: Vec<GuessResult> = Vec::new();
        let mut seen_signatures: HashSet<u32> = HashSet::new();
        for objective in answers.iter() {
            let result = get_result_for_guess(objective, opening_word)?;
            if seen_signatures.insert(result.signature().0) {
                representative_results.push(result);
            }
        }
        let second_guesses = representative_results
            .par_iter()
            .map(|result| {
                let mut pool = CandidatePool::new(answers);
                pool.filter(result)?;
                let scorer = MinExpectedPoolScorer::new(&pool);
                let second_guess = select_best_guess(guesses, &scorer)?;
                Ok((result.signature().0, Box::from(second_guess.as_ref())))
            })
            .collect::<Result<HashMap<u32, Box<str>>, SolverError>>()?;
        Ok(OpeningCache {
            opening_word: Box::from(opening_word),
            second_guesses,
        })
    }

    /// The opening word this cache was built for.
    pub fn opening_word(&self) -> &str {
        &self.opening_word
    }

    /// Returns the number of cached signatures.
    pub fn len(&self) -> usize {
        self.second_guesses.len()
    }

    /// Returns true iff no signatures are cached.
    pub fn is_empty(&self) -> bool {
        self.second_guesses.is_empty()
    }

    /// Looks up the second guess for the signature observed after the opening guess.
    pub fn resolve_second_guess(&self, signature: FeedbackSignature) -> CacheLookup {
        match self.second_guesses.get(&signature.0) {
            Some(word) => CacheLookup::Hit(Arc::from(word.as_ref())),
            None => CacheLookup::Miss,
        }
    }

    /// The conventional cache file name for the given opening word.
    pub fn default_file_name(opening_word: &str) -> String {
        format!("{}-cache.json", opening_word)
    }

    /// Loads a cache from the given JSON file. A missing file is not an error: the solver
    /// simply runs without a cache.
    pub fn load(path: &Path) -> io::Result<Option<OpeningCache>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error),
        };
        let cache = serde_json::from_reader(io::BufReader::new(file))?;
        Ok(Some(cache))
    }

    /// Writes this cache to the given path as JSON.
    pub fn store(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(io::BufWriter::new(file), self)?;
        Ok(())
    }
}
