//! Multi-level correlation search.
//!
//! [`SearchLevels`] derives needle groups of decreasing specificity from a
//! release's metadata, [`CveSearchGuesser`] backs the guessing levels with
//! vocabulary-ranked vendor/product candidates, and [`Heuristic`] walks
//! the groups against the search service, stopping at the first group that
//! yields any hits.

pub mod guesser;
pub mod heuristic;
pub mod search_levels;

pub use guesser::CveSearchGuesser;
pub use heuristic::{CorrelationResult, Heuristic};
pub use search_levels::{LevelIter, NeedleWithMeta, SearchLevels};
