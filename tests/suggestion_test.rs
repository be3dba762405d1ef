//! Integration tests for loading a vocabulary and ranking suggestions.

use std::io::Write;

use ejaan::prelude::*;
use tempfile::NamedTempFile;

fn write_vocabulary(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_suggestions_from_tsv_vocabulary() -> Result<()> {
    let file = write_vocabulary(&[
        "kuda\tn\thorse",
        "kucing\tn\tcat",
        "kue\tn\tcake",
        "sapi\tn\tcow",
        "sopi\tn",
        "sepi\ta",
    ]);
    let vocabulary = Vocabulary::load_tsv(file.path())?;
    let ranker = CandidateRanker::new();

    assert_eq!(ranker.rank("kuda", &vocabulary)?, vec!["kuda"]);
    assert_eq!(ranker.rank("sapo", &vocabulary)?, vec!["sapi"]);
    assert_eq!(ranker.rank("kuceng", &vocabulary)?, vec!["kucing"]);

    Ok(())
}

#[test]
fn test_more_than_five_ties_are_truncated_in_order() -> Result<()> {
    let rows: Vec<String> = (0..8).map(|i| format!("w{i}\tn")).collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = write_vocabulary(&rows);

    let vocabulary = Vocabulary::load_tsv(file.path())?;
    let suggestions = CandidateRanker::new().rank("zz", &vocabulary)?;

    assert_eq!(suggestions, vec!["w0", "w1", "w2", "w3", "w4"]);
    Ok(())
}

#[test]
fn test_distance_properties() {
    let costs = CostModel::default();
    let words = ["kuda", "kucing", "kue", "rumah", "cinta", "qalbu", "", "o", "u"];

    for a in words {
        assert_eq!(edit_distance(a, a, &costs), 0.0);
        for b in words {
            assert!(edit_distance(a, b, &costs) >= 0.0);
        }
    }

    assert_eq!(edit_distance("o", "u", &costs), 0.5);
    assert_eq!(edit_distance("u", "o", &costs), 1.0);
    assert_eq!(edit_distance("", "aei", &costs), 1.5);
}

#[test]
fn test_ranking_is_repeatable() -> Result<()> {
    let vocabulary = Vocabulary::from_words(["kita", "kuta", "kata", "kota", "kutu"]);
    let ranker = CandidateRanker::new();

    let first = ranker.rank_candidates("kote", &vocabulary)?;
    let second = ranker.rank_candidates("kote", &vocabulary)?;
    assert_eq!(first, second);
    assert_eq!(first[0].word, "kota");

    Ok(())
}

#[test]
fn test_errors_surface_to_caller() {
    let dir = tempfile::tempdir().unwrap();
    let missing = Vocabulary::load_tsv(dir.path().join("none.tsv"));
    assert!(matches!(missing, Err(EjaanError::FileNotFound { .. })));

    let vocabulary = Vocabulary::from_words(["kuda"]);
    let empty = CandidateRanker::new().rank("", &vocabulary);
    assert!(matches!(empty, Err(EjaanError::EmptyInput)));

    let nothing = CandidateRanker::new().rank("kuda", &Vocabulary::new()).unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn test_custom_cost_tables_change_ranking() -> Result<()> {
    let vocabulary = Vocabulary::from_words(["kita", "kota"]);

    // "u -> o" is full cost by default, so both words tie
    let default = CandidateRanker::new().rank("kuta", &vocabulary)?;
    assert_eq!(default, vec!["kita", "kota"]);

    let mut costs = CostModel::default();
    costs.substitution_low_cost.entry('u').or_default().insert('o');
    let ranker = CandidateRanker::with_config(costs, RankerConfig::default())?;
    assert_eq!(ranker.rank("kuta", &vocabulary)?, vec!["kota"]);

    Ok(())
}
