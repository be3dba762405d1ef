//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{EjaanArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Candidate;

/// Result structure for suggestion lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub word: String,
    pub known: bool,
    pub suggestions: Vec<Candidate>,
    #[serde(skip)]
    pub show_scores: bool,
}

/// Result structure for distance computations.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub distance: f64,
}

/// Results that know how to print themselves for a person to read.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()>;
}

impl HumanOutput for SuggestionResults {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "The most likely correct spellings of {} are:",
            self.word
        )?;
        for candidate in &self.suggestions {
            if self.show_scores {
                writeln!(
                    out,
                    "- {} (distance {}, score {})",
                    candidate.word, candidate.distance, candidate.score
                )?;
            } else {
                writeln!(out, "- {}", candidate.word)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for DistanceResult {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{} -> {}: {}", self.source, self.target, self.distance)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &EjaanArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &EjaanArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
