//! Command implementations for Ejaan CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: EjaanArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn run_command<R: BufRead, W: Write>(args: &EjaanArgs, input: &mut R, out: &mut W) -> Result<()> {
    let costs = load_costs(args)?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest(suggest_args, args, costs, input, out),
        Command::Distance(distance_args) => distance(distance_args, args, &costs, out),
    }
}

/// Load the cost tables named on the command line, or the defaults.
fn load_costs(args: &EjaanArgs) -> Result<CostModel> {
    match &args.costs {
        Some(path) => CostModel::from_json_file(path),
        None => Ok(CostModel::default()),
    }
}

/// Suggest corrections for a single word.
fn suggest<R: BufRead, W: Write>(
    args: &SuggestArgs,
    cli_args: &EjaanArgs,
    costs: CostModel,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let start_time = Instant::now();
    let vocabulary = Vocabulary::load_tsv(&args.vocabulary)?;
    log::info!(
        "Loaded {} words from {} in {} ms",
        vocabulary.len(),
        args.vocabulary.display(),
        start_time.elapsed().as_millis()
    );

    let word = match &args.word {
        Some(word) => word.clone(),
        None => prompt_word(input, out)?,
    };

    let config = RankerConfig {
        max_suggestions: args.limit,
        parallel: args.parallel,
    };
    let ranker = CandidateRanker::with_config(costs, config)?;

    let known = vocabulary.contains(&word);
    if known {
        log::info!("{word:?} is already in the vocabulary");
    }

    let start_time = Instant::now();
    let suggestions = ranker.rank_candidates(&word, &vocabulary)?;
    log::info!(
        "Found {} suggestions in {} ms",
        suggestions.len(),
        start_time.elapsed().as_millis()
    );

    output_result(
        &SuggestionResults {
            word,
            known,
            suggestions,
            show_scores: args.scores,
        },
        cli_args,
        out,
    )
}

/// Show the distance between two words.
fn distance<W: Write>(
    args: &DistanceArgs,
    cli_args: &EjaanArgs,
    costs: &CostModel,
    out: &mut W,
) -> Result<()> {
    let distance = edit_distance(&args.source, &args.target, costs);

    output_result(
        &DistanceResult {
            source: args.source.clone(),
            target: args.target.clone(),
            distance,
        },
        cli_args,
        out,
    )
}

/// Ask for a word and read one line of input.
fn prompt_word<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "Enter a word: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write as _};

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::EjaanError;

    fn vocabulary_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in ["kita\tpron", "kuta\tn", "kata\tn", "rumah\tn"] {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn run(argv: &[&str], stdin: &str) -> Result<String> {
        let args = EjaanArgs::try_parse_from(argv).unwrap();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        run_command(&args, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_suggest_with_word_argument() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let text = run(&["ejaan", "suggest", "kota", "-d", path], "").unwrap();
        assert_eq!(
            text,
            "The most likely correct spellings of kota are:\n- kuta\n- kata\n"
        );
    }

    #[test]
    fn test_suggest_prompts_when_word_missing() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let text = run(&["ejaan", "suggest", "-d", path], "ruma\n").unwrap();
        assert_eq!(
            text,
            "Enter a word: The most likely correct spellings of ruma are:\n- rumah\n"
        );
    }

    #[test]
    fn test_suggest_empty_prompt_fails() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let result = run(&["ejaan", "suggest", "-d", path], "\n");
        assert!(matches!(result, Err(EjaanError::EmptyInput)));
    }

    #[test]
    fn test_suggest_missing_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kbbi.tsv");

        let result = run(&["ejaan", "suggest", "kota", "-d", path.to_str().unwrap()], "");
        assert!(matches!(result, Err(EjaanError::FileNotFound { .. })));
    }

    #[test]
    fn test_suggest_json_marks_known_word() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let text = run(&["ejaan", "-f", "json", "suggest", "kata", "-d", path], "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["known"], true);
        assert_eq!(value["suggestions"][0]["word"], "kata");
        assert_eq!(value["suggestions"][0]["distance"], 0.0);
    }

    #[test]
    fn test_suggest_zero_limit_is_config_error() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let result = run(&["ejaan", "suggest", "kota", "-d", path, "-n", "0"], "");
        assert!(matches!(result, Err(EjaanError::Config(_))));
    }

    #[test]
    fn test_distance_with_custom_costs() {
        let mut costs = NamedTempFile::new().unwrap();
        write!(costs, r#"{{"modified_cost": 0.25}}"#).unwrap();
        costs.flush().unwrap();
        let costs_path = costs.path().to_str().unwrap();

        let text = run(&["ejaan", "distance", "o", "u"], "").unwrap();
        assert_eq!(text, "o -> u: 0.5\n");

        let text = run(&["ejaan", "--costs", costs_path, "-f", "json", "distance", "o", "u"], "")
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["distance"], 0.25);
    }

    #[test]
    fn test_human_output_keeps_exact_custom_costs() {
        let mut costs = NamedTempFile::new().unwrap();
        write!(costs, r#"{{"modified_cost": 0.25}}"#).unwrap();
        costs.flush().unwrap();
        let costs_path = costs.path().to_str().unwrap();

        let text = run(&["ejaan", "--costs", costs_path, "distance", "o", "u"], "").unwrap();
        assert_eq!(text, "o -> u: 0.25\n");

        let text = run(&["ejaan", "--costs", costs_path, "distance", "ooo", "uuu"], "").unwrap();
        assert_eq!(text, "ooo -> uuu: 0.75\n");

        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();
        let text = run(
            &["ejaan", "--costs", costs_path, "suggest", "kota", "-d", path, "--scores"],
            "",
        )
        .unwrap();
        assert!(text.contains("- kuta (distance 0.25, score 0.9375)"));
        assert!(text.contains("- kata (distance 0.25, score 0.9375)"));
    }
}
