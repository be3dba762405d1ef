//! Vocabulary of known-correct words.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use ahash::AHashSet;
use csv::ReaderBuilder;

use crate::error::{EjaanError, Result};

/// An ordered list of known words.
///
/// Iteration order is the load order and decides which word wins a tie
/// during ranking.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Words in load order
    words: Vec<String>,
    /// Set of all words for fast lookup
    word_set: AHashSet<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from words, keeping their order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let word_set = words.iter().cloned().collect();
        Vocabulary { words, word_set }
    }

    /// Load a vocabulary from a tab-separated file.
    ///
    /// The first column of every row is taken as a word, in row order. There
    /// is no header row and rows may have any number of columns. Quote
    /// characters are kept as part of the word, and rows with an empty first
    /// column are skipped with a warning rather than failing the load.
    pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EjaanError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => EjaanError::load_failure(path, e),
        })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut words = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| EjaanError::load_failure(path, e))?;
            match record.get(0) {
                Some(word) if !word.is_empty() => words.push(word.to_string()),
                _ => log::warn!(
                    "Skipping row {} of {}: empty first column",
                    row + 1,
                    path.display()
                ),
            }
        }

        log::debug!("Loaded {} words from {}", words.len(), path.display());

        Ok(Self::from_words(words))
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Get the number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
