//! Ladder validation.

use crate::adjacency::are_neighbors;
use crate::game::Doublets;

impl Doublets {
    /// Check that `sequence` is a word ladder.
    ///
    /// An empty sequence is not a ladder. A single word always is, whether or
    /// not it is in the lexicon. Otherwise every word must be in the lexicon
    /// and each consecutive pair must be neighbors (compared case-insensitively).
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        match sequence {
            [] => false,
            [_] => true,
            _ => sequence.windows(2).all(|pair| {
                let a = pair[0].as_ref().to_lowercase();
                let b = pair[1].as_ref().to_lowercase();
                are_neighbors(&a, &b) && self.is_word(&a) && self.is_word(&b)
            }),
        }
    }
}
