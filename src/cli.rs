//! CLI argument definitions for prlint.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prlint")]
#[command(version)]
#[command(about = "Validate pull-request descriptions against the PR template", long_about = None)]
#[command(
    after_help = "IN CI:\n    PR_DESCRIPTION=$(prlint convert body.md --base64) prlint check\n\n    The check exits 0 when every section passes, 1 when any section fails\n    and 2 when the payload cannot be read or decoded."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a base64-encoded description payload
    Check {
        /// Environment variable holding the payload (defaults to config, then PR_DESCRIPTION)
        #[arg(long, value_name = "VAR")]
        env: Option<String>,
        /// Read the base64 payload from a file instead of the environment
        #[arg(long, value_name = "PATH", conflicts_with = "env")]
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Config file (defaults to .prlint/config.md when present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Convert a markdown PR body into the description payload
    Convert {
        /// Markdown file to read, or '-' for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Emit a single base64 line instead of pretty JSON
        #[arg(long)]
        base64: bool,
    },
    /// Show version information
    Version {
        /// Show commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate man page
    Man {
        /// Output directory for the man page
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
