//! Utility commands (version, man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

const BIN_NAME: &str = "prlint";

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    println!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"));

    if verbose {
        // Embedded by build.rs
        println!("commit: {}", env!("GIT_SHA"));
        println!("built: {}", env!("BUILD_DATE"));
    }

    Ok(())
}

/// Write `prlint.1` into `out_dir` (current directory by default).
pub fn cmd_man(out_dir: Option<&Path>) -> Result<()> {
    let man_path = write_man_page(out_dir.unwrap_or(Path::new(".")))?;
    println!("Man page written to: {}", man_path.display());
    Ok(())
}

fn write_man_page(dir: &Path) -> Result<PathBuf> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(Cli::command())
        .render(&mut buffer)
        .context("Failed to render man page")?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let man_path = dir.join(format!("{}.1", BIN_NAME));
    std::fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    Ok(man_path)
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    generate(shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
    Ok(())
}
