//! Command-line interface for gallery-verify.
//!
//! ## Usage
//!
//! ```text
//! # Verify the gallery of the project in the current directory
//! gallery-verify
//!
//! # Another project, JSON report for scripting
//! gallery-verify --root ../synth --json
//!
//! # Fail on unreferenced snapshots and require charts for audio snapshots
//! gallery-verify --strict --require-audio-svg
//!
//! # Custom directory layout
//! gallery-verify --layout gallery.json --verbose
//! ```
//!
//! The process exits with 0 when the gallery is consistent and 1 otherwise.

use clap::Parser;

pub mod verify;

#[derive(Parser)]
#[command(name = "gallery-verify")]
#[command(version)]
#[command(about = "Verify that markdown pages reference existing snapshot artifacts")]
#[command(
    long_about = "gallery-verify checks a directory of test snapshots against the documentation pages that embed their rendered charts and audio.\n\nIt reports:\n- Snapshots whose chart (.snap.svg) or audio (.snap.wav) is never referenced\n- References to snapshots that do not exist\n- Snapshots not referenced at all (informational unless --strict)"
)]
pub struct Cli {
    #[command(flatten)]
    pub verify: verify::VerifyArgs,

    /// Show additional informational sections and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output JSON report (shorthand for --format json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl Cli {
    /// Output format after applying the `--json` shorthand
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shorthand() {
        let cli = Cli::try_parse_from(["gallery-verify", "--json"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::try_parse_from(["gallery-verify"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_json_conflicts_with_format() {
        let result = Cli::try_parse_from(["gallery-verify", "--json", "--format", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "gallery-verify",
            "--root",
            "/tmp/project",
            "--strict",
            "--require-audio-svg",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.verify.root, std::path::PathBuf::from("/tmp/project"));
        assert!(cli.verify.strict);
        assert!(cli.verify.require_audio_svg);
        assert!(cli.verbose);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
