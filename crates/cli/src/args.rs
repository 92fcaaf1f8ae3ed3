use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clave_core::SampleKind;

#[derive(Parser)]
#[command(name = "clave")]
#[command(about = "Analyze the sentiment of Spanish-English code-switched text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (falls back to CLAVE_CONFIG, then ./clave.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "clave_core=trace" (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one utterance
    Analyze {
        /// Text to analyze (at most 100 characters)
        #[arg(required_unless_present = "sample", conflicts_with = "sample")]
        text: Vec<String>,

        /// Analyze a built-in example instead
        #[arg(long, value_enum)]
        sample: Option<SampleArg>,
    },

    /// Check that the analysis service is up
    Health,

    /// Read utterances from stdin, one per line (":q" to quit)
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SampleArg {
    Positive,
    Negative,
    Neutral,
}

impl From<SampleArg> for SampleKind {
    fn from(arg: SampleArg) -> Self {
        match arg {
            SampleArg::Positive => SampleKind::Positive,
            SampleArg::Negative => SampleKind::Negative,
            SampleArg::Neutral => SampleKind::Neutral,
        }
    }
}
