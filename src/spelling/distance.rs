//! Weighted Levenshtein distance driven by a [`CostModel`].

use crate::spelling::cost::CostModel;

/// Compute the minimum cumulative cost of turning `source` into `target`.
///
/// Exact character matches are free; every other step is priced by the
/// cost model. The result is not symmetric in its arguments because the
/// substitution table is keyed by the source character.
pub fn edit_distance(source: &str, target: &str, costs: &CostModel) -> f64 {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    edit_distance_chars(&source, &target, costs)
}

/// Same as [`edit_distance`] for pre-split character sequences.
#[allow(clippy::needless_range_loop)]
pub fn edit_distance_chars(source: &[char], target: &[char], costs: &CostModel) -> f64 {
    let len1 = source.len();
    let len2 = target.len();

    let mut matrix = vec![vec![0.0; len2 + 1]; len1 + 1];

    // Deleting the first i characters of the source
    for i in 1..=len1 {
        matrix[i][0] = matrix[i - 1][0] + costs.deletion_cost(source, i - 1);
    }

    // Inserting the first j characters of the target, priced against the
    // target prefix built so far
    for j in 1..=len2 {
        let prefix = &target[..j];
        matrix[0][j] = matrix[0][j - 1] + costs.insertion_cost(prefix, j - 1, target[j - 1]);
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            if source[i - 1] == target[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
                continue;
            }

            let deletion = matrix[i - 1][j] + costs.deletion_cost(source, i - 1);
            let insertion = matrix[i][j - 1] + costs.insertion_cost(source, i, target[j - 1]);
            let substitution =
                matrix[i - 1][j - 1] + costs.substitution_cost(source, i - 1, target[j - 1]);

            matrix[i][j] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[len1][len2]
}

/// Computes distances from one fixed input word to many candidates.
#[derive(Debug, Clone)]
pub struct WeightedMatcher<'a> {
    query: Vec<char>,
    costs: &'a CostModel,
}

impl<'a> WeightedMatcher<'a> {
    /// Create a new matcher for the given query word.
    pub fn new(query: &str, costs: &'a CostModel) -> Self {
        WeightedMatcher {
            query: query.chars().collect(),
            costs,
        }
    }

    /// Number of characters in the query word.
    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    /// Distance from the query word to `candidate`.
    pub fn distance(&self, candidate: &str) -> f64 {
        let candidate: Vec<char> = candidate.chars().collect();
        edit_distance_chars(&self.query, &candidate, self.costs)
    }
}
