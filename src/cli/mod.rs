//! CLI module for Lektor.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::Parser;
use std::path::PathBuf;

/// Lektor - Lecture Note Extraction and Exam Synthesis
///
/// Extracts exam-relevant notes from lecture subtitle files and synthesizes
/// practice exams from them. The name "Lektor" comes from the
/// Norwegian/Danish word for "lecturer."
#[derive(Parser, Debug)]
#[command(name = "lektor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory of lecture subtitle files
    #[arg(long, default_value = "./subtitles")]
    pub subtitles: String,

    /// Directory for extracted note documents
    #[arg(long, default_value = "./gems")]
    pub gems: String,

    /// Model identifier for the generation service
    #[arg(long, default_value = "o3-mini")]
    pub model: String,

    /// Run the batch extraction phase
    #[arg(long)]
    pub extract: bool,

    /// Run the exam synthesis phase
    #[arg(long = "exam_gen")]
    pub exam_gen: bool,

    /// Directory of TOML prompt overrides (extract.toml, exam.toml)
    #[arg(long)]
    pub prompts: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Expanded subtitles directory path.
    pub fn subtitles_dir(&self) -> PathBuf {
        expand_path(&self.subtitles)
    }

    /// Expanded gems directory path.
    pub fn gems_dir(&self) -> PathBuf {
        expand_path(&self.gems)
    }
}

/// Expand shell variables in paths (e.g., ~).
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lektor"]);
        assert_eq!(cli.subtitles, "./subtitles");
        assert_eq!(cli.gems, "./gems");
        assert_eq!(cli.model, "o3-mini");
        assert!(!cli.extract);
        assert!(!cli.exam_gen);
    }

    #[test]
    fn test_phase_flags() {
        let cli = Cli::parse_from(["lektor", "--extract", "--exam_gen", "--model", "gpt-4o"]);
        assert!(cli.extract);
        assert!(cli.exam_gen);
        assert_eq!(cli.model, "gpt-4o");
    }
}
