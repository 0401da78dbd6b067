//! Hamming distance and the neighbor relation between words.
//!
//! Two words are neighbors when they have the same length and differ in
//! exactly one position. Comparison here is case-sensitive; callers
//! normalize case first.

use std::collections::HashMap;

use log::debug;

use crate::lexicon::Lexicon;

/// How [`Doublets`](crate::Doublets) enumerates the neighbors of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategy {
    /// Scan the whole lexicon on every query.
    #[default]
    Scan,
    /// Look neighbors up in an [`AdjacencyIndex`] built once up front.
    Indexed,
}

/// Number of positions at which `a` and `b` differ.
///
/// Returns `None` when the words have different lengths: such words are not
/// comparable under this metric, and are never neighbors.
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// True iff `a` and `b` differ in exactly one position.
pub fn are_neighbors(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}

/// Neighbors of `word` by full scan, in lexicon order.
pub(crate) fn scan_neighbors(lexicon: &Lexicon, word: &str) -> Vec<String> {
    lexicon
        .iter()
        .filter(|w| are_neighbors(w, word))
        .map(str::to_owned)
        .collect()
}

/// Groups words by "wildcard pattern": the word with one position blanked.
///
/// Every neighbor of a word shares exactly one such pattern with it, so the
/// neighbors of any query word are the union of its pattern buckets minus
/// the word itself. Buckets store positions into the sorted word list, which
/// lets lookups restore lexicon order with a plain sort.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    words: Vec<String>,
    buckets: HashMap<(usize, String), Vec<usize>>,
}

impl AdjacencyIndex {
    pub fn build(lexicon: &Lexicon) -> Self {
        let words: Vec<String> = lexicon.iter().map(str::to_owned).collect();
        let mut buckets: HashMap<(usize, String), Vec<usize>> = HashMap::new();

        for (id, word) in words.iter().enumerate() {
            for pos in 0..word.chars().count() {
                buckets.entry(pattern(word, pos)).or_default().push(id);
            }
        }

        debug!(
            "built adjacency index: {} words, {} patterns",
            words.len(),
            buckets.len()
        );
        Self { words, buckets }
    }

    /// Neighbors of `word` (already lowercased), in lexicon order.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let mut ids: Vec<usize> = (0..word.chars().count())
            .filter_map(|pos| self.buckets.get(&pattern(word, pos)))
            .flatten()
            .copied()
            .filter(|&id| self.words[id] != word)
            .collect();
        ids.sort_unstable();

        ids.into_iter().map(|id| self.words[id].clone()).collect()
    }

    #[cfg(test)]
    fn pattern_count(&self) -> usize {
        self.buckets.len()
    }
}

/// `word` with the character at `pos` removed, tagged by `pos`.
fn pattern(word: &str, pos: usize) -> (usize, String) {
    let rest = word
        .chars()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, c)| c)
        .collect();
    (pos, rest)
}
