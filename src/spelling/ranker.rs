//! Ranking vocabulary words against a possibly misspelled input.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EjaanError, Result};
use crate::spelling::cost::CostModel;
use crate::spelling::distance::WeightedMatcher;
use crate::spelling::vocabulary::Vocabulary;

/// A vocabulary word considered as a correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Weighted edit distance from the input word.
    pub distance: f64,
    /// `1 - distance / input length`. Not bounded below.
    pub score: f64,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(word: String, distance: f64, score: f64) -> Self {
        Candidate {
            word,
            distance,
            score,
        }
    }
}

/// Configuration for candidate ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Compute distances on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            max_suggestions: 5,
            parallel: false,
        }
    }
}

/// Running state of the left-to-right scan.
///
/// Only the group sharing the best `(distance, score)` pair seen so far is
/// kept. A word that beats it replaces the whole group, a word that equals
/// it joins the group, anything else is dropped.
#[derive(Debug)]
struct BestGroup {
    min_distance: f64,
    best_score: f64,
    candidates: Vec<Candidate>,
}

impl BestGroup {
    fn new() -> Self {
        BestGroup {
            min_distance: f64::INFINITY,
            best_score: 0.0,
            candidates: Vec::new(),
        }
    }

    fn offer(&mut self, word: &str, distance: f64, score: f64) {
        if distance < self.min_distance
            || (distance == self.min_distance && score > self.best_score)
        {
            log::trace!("{word}: new best (distance {distance}, score {score})");
            self.min_distance = distance;
            self.best_score = score;
            self.candidates.clear();
            self.candidates
                .push(Candidate::new(word.to_string(), distance, score));
        } else if distance == self.min_distance && score == self.best_score {
            log::trace!("{word}: tied (distance {distance}, score {score})");
            self.candidates
                .push(Candidate::new(word.to_string(), distance, score));
        } else {
            log::trace!("{word}: discarded (distance {distance}, score {score})");
        }
    }
}

/// Suggests the closest vocabulary words for an input word.
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    costs: CostModel,
    config: RankerConfig,
}

impl CandidateRanker {
    /// Create a ranker with the default cost model and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker with custom cost tables and configuration.
    pub fn with_config(costs: CostModel, config: RankerConfig) -> Result<Self> {
        costs.validate()?;
        if config.max_suggestions == 0 {
            return Err(EjaanError::invalid_config(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(CandidateRanker { costs, config })
    }

    /// Get the cost model in use.
    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Get the ranking configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Return up to `max_suggestions` likely correct spellings of `word`.
    pub fn rank(&self, word: &str, vocabulary: &Vocabulary) -> Result<Vec<String>> {
        Ok(self
            .rank_candidates(word, vocabulary)?
            .into_iter()
            .map(|candidate| candidate.word)
            .collect())
    }

    /// Like [`rank`](Self::rank) but keeps the distance and score of each
    /// suggestion.
    pub fn rank_candidates(&self, word: &str, vocabulary: &Vocabulary) -> Result<Vec<Candidate>> {
        let matcher = WeightedMatcher::new(word, &self.costs);
        if matcher.query_len() == 0 {
            return Err(EjaanError::EmptyInput);
        }
        let length = matcher.query_len() as f64;

        let distances: Vec<f64> = if self.config.parallel {
            vocabulary
                .words()
                .par_iter()
                .map(|candidate| matcher.distance(candidate))
                .collect()
        } else {
            vocabulary
                .iter()
                .map(|candidate| matcher.distance(candidate))
                .collect()
        };

        // The fold stays sequential so ties resolve in vocabulary order
        let mut best = BestGroup::new();
        for (candidate, distance) in vocabulary.iter().zip(distances) {
            best.offer(candidate, distance, 1.0 - distance / length);
        }

        let mut result = best.candidates;
        log::debug!(
            "Ranked {} words for {word:?}: minimum distance {}, {} tied",
            vocabulary.len(),
            best.min_distance,
            result.len()
        );
        result.truncate(self.config.max_suggestions);

        Ok(result)
    }
}
