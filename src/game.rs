//! The Doublets game: a lexicon plus the neighbor relation over it.
//!
//! Ladder validation lives in [`crate::ladder`] and shortest-ladder search in
//! [`crate::search`]; both are built on [`Doublets::neighbors`].

use std::io::BufRead;

use crate::adjacency::{self, AdjacencyIndex, NeighborStrategy};
use crate::error::LexiconError;
use crate::lexicon::Lexicon;

/// A word ladder game over a fixed lexicon.
#[derive(Debug, Clone)]
pub struct Doublets {
    lexicon: Lexicon,
    index: Option<AdjacencyIndex>,
}

impl Doublets {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            index: None,
        }
    }

    /// Build a game from a line-oriented word list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::from_reader(reader)?))
    }

    /// Switch how neighbors are enumerated. Results are identical either way.
    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.index = match strategy {
            NeighborStrategy::Scan => None,
            NeighborStrategy::Indexed => Some(
                self.index
                    .take()
                    .unwrap_or_else(|| AdjacencyIndex::build(&self.lexicon)),
            ),
        };
        self
    }

    pub fn strategy(&self) -> NeighborStrategy {
        if self.index.is_some() {
            NeighborStrategy::Indexed
        } else {
            NeighborStrategy::Scan
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// All lexicon words one position away from `word`, in lexicon order.
    ///
    /// `word` is lowercased first and need not be in the lexicon itself.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        match &self.index {
            Some(index) => index.neighbors(&word),
            None => adjacency::scan_neighbors(&self.lexicon, &word),
        }
    }
}

impl From<Lexicon> for Doublets {
    fn from(lexicon: Lexicon) -> Self {
        Self::new(lexicon)
    }
}
