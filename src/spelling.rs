//! Spelling suggestions for Ejaan.
//!
//! The pieces build on each other: [`cost`] prices single-character edits,
//! [`distance`] sums those prices into a weighted Levenshtein distance, and
//! [`ranker`] scans a [`vocabulary`] for the closest words.

pub mod cost;
pub mod distance;
pub mod ranker;
pub mod vocabulary;

// Re-export commonly used types
pub use cost::*;
pub use distance::*;
pub use ranker::*;
pub use vocabulary::*;
