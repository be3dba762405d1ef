//! # Ejaan
//!
//! Spelling suggestions from a weighted edit distance.
//!
//! ## Features
//!
//! - Reduced costs for common transcription errors (silent letters, vowel
//!   insertions, `c`/`k`/`s` confusion)
//! - Directional substitution tables loadable from JSON
//! - Deterministic top-5 ranking in vocabulary order
//! - Optional parallel distance computation
//!
//! ```
//! use ejaan::spelling::{CandidateRanker, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_words(["kita", "kuta", "kata"]);
//! let suggestions = CandidateRanker::new().rank("kota", &vocabulary).unwrap();
//! assert_eq!(suggestions, vec!["kuta", "kata"]);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{EjaanError, Result};
    pub use crate::spelling::{
        Candidate, CandidateRanker, CostModel, RankerConfig, Vocabulary, edit_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
