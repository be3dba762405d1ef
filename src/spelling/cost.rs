//! Per-character operation costs for the weighted edit distance.
//!
//! Certain edits are common transcription errors (dropping a silent `h`,
//! writing `k` for `c`, adding a vowel) and are therefore cheaper than an
//! arbitrary edit. [`CostModel`] holds those reduced-cost tables as an
//! immutable value that is passed by reference into the distance engine.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EjaanError, Result};

/// Base cost of inserting a character.
pub const INSERTION_COST: f64 = 1.0;
/// Base cost of deleting a character.
pub const DELETION_COST: f64 = 1.0;
/// Base cost of substituting one character for another.
pub const SUBSTITUTION_COST: f64 = 1.0;
/// Cost applied when an operation hits one of the reduced-cost tables.
pub const MODIFIED_COST: f64 = 0.5;

/// Returns true if `c` is one of the five plain vowels.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Cost tables for deletion, insertion and substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Cost of an insertion that is not in the reduced table.
    pub insertion_cost: f64,
    /// Cost of a deletion that is not in the reduced table.
    pub deletion_cost: f64,
    /// Cost of a substitution that is not in the reduced table.
    pub substitution_cost: f64,
    /// Cost of any operation found in a reduced table.
    pub modified_cost: f64,
    /// Characters that are cheap to insert.
    pub insertion_low_cost: BTreeSet<char>,
    /// Source character to the target characters it is cheap to replace it with.
    pub substitution_low_cost: BTreeMap<char, BTreeSet<char>>,
    /// Characters that are cheap to delete.
    pub deletion_low_cost: BTreeSet<char>,
}

impl Default for CostModel {
    fn default() -> Self {
        let substitution_low_cost: BTreeMap<char, BTreeSet<char>> = [
            ('o', &['u', 'a'][..]),
            ('e', &['a', 'i'][..]),
            ('c', &['k', 's'][..]),
            ('q', &['k'][..]),
            ('w', &['u'][..]),
            ('k', &['g'][..]),
        ]
        .into_iter()
        .map(|(source, targets)| (source, targets.iter().copied().collect()))
        .collect();

        CostModel {
            insertion_cost: INSERTION_COST,
            deletion_cost: DELETION_COST,
            substitution_cost: SUBSTITUTION_COST,
            modified_cost: MODIFIED_COST,
            insertion_low_cost: ('a'..='z').filter(|&c| is_vowel(c)).collect(),
            substitution_low_cost,
            deletion_low_cost: ['h', 'c', 'd'].into_iter().collect(),
        }
    }
}

impl CostModel {
    /// Create the default cost model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load cost tables from a JSON file. Fields missing from the file keep
    /// their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EjaanError::invalid_config(format!("cannot open {}: {e}", path.display()))
        })?;
        let model: CostModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;

        log::debug!(
            "Loaded cost tables from {} ({} cheap insertions, {} cheap substitution sources, {} cheap deletions)",
            path.display(),
            model.insertion_low_cost.len(),
            model.substitution_low_cost.len(),
            model.deletion_low_cost.len()
        );

        Ok(model)
    }

    /// Check that every cost is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let costs = [
            ("insertion_cost", self.insertion_cost),
            ("deletion_cost", self.deletion_cost),
            ("substitution_cost", self.substitution_cost),
            ("modified_cost", self.modified_cost),
        ];
        for (name, cost) in costs {
            if !cost.is_finite() || cost < 0.0 {
                return Err(EjaanError::invalid_config(format!(
                    "{name} must be a finite non-negative number, got {cost}"
                )));
            }
        }
        Ok(())
    }

    /// Cost of deleting the character at `position` in `word`.
    ///
    /// An empty word costs nothing to delete from. A position past the end
    /// of the word falls back to the base cost.
    pub fn deletion_cost(&self, word: &[char], position: usize) -> f64 {
        if word.is_empty() {
            return 0.0;
        }
        match word.get(position) {
            Some(c) if self.deletion_low_cost.contains(c) => self.modified_cost,
            _ => self.deletion_cost,
        }
    }

    /// Cost of inserting `ch` at `index` in `word`.
    ///
    /// Only an index inside the word consults the reduced table.
    pub fn insertion_cost(&self, word: &[char], index: usize, ch: char) -> f64 {
        if word.is_empty() || index >= word.len() {
            return self.insertion_cost;
        }
        if self.insertion_low_cost.contains(&ch) {
            self.modified_cost
        } else {
            self.insertion_cost
        }
    }

    /// Cost of replacing the character at `index` in `word` with `ch`.
    ///
    /// The table is keyed by the character being replaced, so the cost is
    /// directional: `o -> u` is cheap while `u -> o` is not.
    pub fn substitution_cost(&self, word: &[char], index: usize, ch: char) -> f64 {
        if word.is_empty() || index >= word.len() {
            return self.substitution_cost;
        }
        match self.substitution_low_cost.get(&word[index]) {
            Some(targets) if targets.contains(&ch) => self.modified_cost,
            _ => self.substitution_cost,
        }
    }
}
