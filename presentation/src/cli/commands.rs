//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for solve results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with the per-check breakdown
    Full,
    /// Only the answer and visible reasoning
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for verisolve
#[derive(Parser, Debug)]
#[command(name = "verisolve")]
#[command(author, version, about = "Self-checking solver - plan, execute, verify, retry")]
#[command(long_about = r#"
Verisolve answers word problems with a three-phase reasoning loop:

1. Plan: the model drafts a numbered step-by-step plan
2. Execute: the model follows the plan and emits a structured solution
3. Verify: the model re-checks the solution (correctness, arithmetic,
   logic, constraints, units)

If any check fails, the loop re-plans from scratch, up to --max-retries
extra attempts.

Requires a Gemini API key in GEMINI_API_KEY or in the config file.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./verisolve.toml    Project-level config
3. ~/.config/verisolve/config.toml   Global config

Example:
  verisolve "If a train leaves at 14:30 and arrives at 18:05, how long is the journey?"
  verisolve --chat
  verisolve --suite --suite-output results.json
"#)]
pub struct Cli {
    /// The question to solve (not required in chat or suite mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Run the built-in fixture suite instead of a single question
    #[arg(long)]
    pub suite: bool,

    /// Write suite results to this JSON file (overwrites)
    #[arg(long, value_name = "PATH", requires = "suite")]
    pub suite_output: Option<PathBuf>,

    /// Maximum retries after a failed verification
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
