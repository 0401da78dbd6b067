//! The dictionary of valid words.
//!
//! Words are stored lowercased in a sorted set. Iteration order is
//! lexicographic, and neighbor enumeration (and therefore the tie-break
//! between equally short ladders) depends on it.

use std::collections::BTreeSet;
use std::io::BufRead;

use log::debug;

use crate::error::LexiconError;

/// An immutable, case-normalized set of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a line-oriented source.
    ///
    /// The first whitespace-delimited token of each line is taken as a word;
    /// the rest of the line is ignored, as are blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut words = BTreeSet::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::Read {
                line: i + 1,
                source,
            })?;
            if let Some(token) = line.split_whitespace().next() {
                words.insert(token.to_lowercase());
            }
        }

        debug!("loaded lexicon with {} words", words.len());
        Ok(Self { words })
    }

    /// Build a lexicon from words already in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}
