use crate::results::SolverError;
use std::io::BufRead;
use std::io::Result;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable list of words, all of the same length.
///
/// The solver uses two banks per game: the possible answers, and the (superset) list of
/// words that may legally be guessed.
#[derive(Debug, Clone)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be converted to lower
    /// case. Empty lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self> {
        let words = word_reader
            .lines()
            .map(|maybe_word| maybe_word.map(|word| word.trim().to_lowercase()))
            .filter(|maybe_word| {
                maybe_word
                    .as_ref()
                    .map_or(true, |word: &String| !word.is_empty())
            })
            .collect::<Result<Vec<String>>>()?;
        WordBank::from_iterator(words)
            .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidData, error))
    }

    /// Constructs a new `WordBank` struct using the given words.
    ///
    /// Each word will be converted to lower case. Fails with
    /// [`SolverError::InvalidWordList`] if no words are given, or if the words don't all
    /// have the same length.
    pub fn from_iterator<S, I>(words: I) -> std::result::Result<Self, SolverError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let all_words: Vec<Arc<str>> = words
            .into_iter()
            .map(|word| Arc::from(word.as_ref().to_lowercase().as_str()))
            .collect();
        let word_length = all_words
            .first()
            .map(|word: &Arc<str>| word.chars().count())
            .ok_or(SolverError::InvalidWordList)?;
        if all_words
            .iter()
            .any(|word| word.chars().count() != word_length)
        {
            return Err(SolverError::InvalidWordList);
        }
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns whether the given word is in this bank.
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|known| known.as_ref() == word)
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns true iff the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
