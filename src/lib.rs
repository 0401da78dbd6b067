//! # Doublets
//!
//! A word ladder engine. Given a dictionary, it decides whether two words are
//! neighbors (same length, exactly one differing position), validates
//! ladders, and finds a shortest ladder between two words by breadth-first
//! search over the implicit neighbor graph.
//!
//! ```
//! use doublets::{Doublets, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "hot", "hat"]);
//! let game = Doublets::new(lexicon);
//!
//! let ladder = game.min_ladder("cat", "dog");
//! assert_eq!(ladder, ["cat", "cot", "cog", "dog"]);
//! assert!(game.is_word_ladder(&ladder));
//! ```

pub mod adjacency;
pub mod error;
pub mod game;
mod ladder;
pub mod lexicon;
pub mod search;

pub use adjacency::{are_neighbors, hamming_distance, AdjacencyIndex, NeighborStrategy};
pub use error::{LexiconError, SearchError};
pub use game::Doublets;
pub use lexicon::Lexicon;
pub use search::SearchLimits;
