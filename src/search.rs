//! Shortest-ladder search.
//!
//! Breadth-first search over the implicit graph whose vertices are lexicon
//! words and whose edges join neighbors. Neighbors are expanded in lexicon
//! order and the search stops at the first discovery of the target, so among
//! several shortest ladders the one returned is fixed by that order. It is
//! not necessarily the lexicographically smallest ladder.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::SearchError;
use crate::game::Doublets;

/// Bounds for [`Doublets::min_ladder_within`]. The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    deadline: Option<Duration>,
    max_expansions: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up once the search has run for `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Give up after expanding `limit` nodes.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Give up as soon as `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.deadline.is_none() && self.max_expansions.is_none() && self.cancel.is_none()
    }

    fn check(&self, expansions: usize, started: Instant) -> Result<(), SearchError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
        }
        if let Some(limit) = self.max_expansions {
            if expansions >= limit {
                return Err(SearchError::ExpansionLimitReached { limit });
            }
        }
        if let Some(deadline) = self.deadline {
            let elapsed = started.elapsed();
            if elapsed >= deadline {
                return Err(SearchError::DeadlineExceeded { elapsed });
            }
        }
        Ok(())
    }
}

/// A discovered word and the arena slot of the node it was reached from.
#[derive(Debug)]
struct SearchNode {
    word: String,
    parent: Option<usize>,
}

/// Words from the root down to `from`, following parent links.
fn backtrack(arena: &[SearchNode], from: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut at = Some(from);
    while let Some(i) = at {
        path.push(arena[i].word.clone());
        at = arena[i].parent;
    }
    path.reverse();
    path
}

impl Doublets {
    /// Shortest ladder from `start` to `end`, or an empty ladder if there is
    /// none.
    ///
    /// Words are matched case-insensitively and the ladder is returned in
    /// lowercase. Unknown words and words of different lengths give an empty
    /// ladder; `start == end` gives the one-word ladder `[start]`.
    ///
    /// The first word is the lexicon (lowercase) form of `start`, not the
    /// caller's spelling: `min_ladder("CAT", "cat")` is `["cat"]`.
    pub fn min_ladder(&self, start: &str, end: &str) -> Vec<String> {
        // Only limits can stop a search early, and there are none.
        self.min_ladder_within(start, end, &SearchLimits::default())
            .unwrap_or_default()
    }

    /// Like [`min_ladder`](Self::min_ladder), but checks `limits` before
    /// expanding each node.
    pub fn min_ladder_within(
        &self,
        start: &str,
        end: &str,
        limits: &SearchLimits,
    ) -> Result<Vec<String>, SearchError> {
        let start = start.to_lowercase();
        let end = end.to_lowercase();

        if !self.is_word(&start) || !self.is_word(&end) {
            return Ok(Vec::new());
        }
        if start.chars().count() != end.chars().count() {
            return Ok(Vec::new());
        }
        if start == end {
            return Ok(vec![start]);
        }

        debug!("searching for ladder {} -> {}", start, end);
        let started = Instant::now();
        let mut expansions = 0;

        let mut arena = vec![SearchNode {
            word: start.clone(),
            parent: None,
        }];
        let mut frontier = VecDeque::from([0]);
        let mut visited = HashSet::from([start]);

        while let Some(current) = frontier.pop_front() {
            if let Err(err) = limits.check(expansions, started) {
                debug!(
                    "ladder search stopped after {} expansions: {}",
                    expansions, err
                );
                return Err(err);
            }
            expansions += 1;
            trace!("expanding {}", arena[current].word);

            for word in self.neighbors(&arena[current].word) {
                if !visited.insert(word.clone()) {
                    continue;
                }
                if word == end {
                    let mut ladder = backtrack(&arena, current);
                    ladder.push(word);
                    debug!(
                        "found ladder of {} words after {} expansions",
                        ladder.len(),
                        expansions
                    );
                    return Ok(ladder);
                }
                arena.push(SearchNode {
                    word,
                    parent: Some(current),
                });
                frontier.push_back(arena.len() - 1);
            }
        }

        debug!(
            "no ladder {} -> {} ({} expansions)",
            arena[0].word, end, expansions
        );
        Ok(Vec::new())
    }

    /// Solve many independent queries in parallel. Results follow input order.
    pub fn min_ladders<S>(&self, pairs: &[(S, S)]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.min_ladder(start.as_ref(), end.as_ref()))
            .collect()
    }
}
