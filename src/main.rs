//! CLI entry point for prlint.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use prlint::report::EXIT_INPUT_ERROR;
use prlint::ui;

fn main() {
    let cli = Cli::parse();
    ui::set_quiet(cli.quiet);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::error(&format!("{:#}", e));
            std::process::exit(EXIT_INPUT_ERROR);
        }
    }
}

/// Dispatch a parsed command, returning the process exit status.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            env,
            file,
            format,
            config,
        } => cmd::check::cmd_check(env.as_deref(), file.as_deref(), format, config.as_deref()),
        Commands::Convert { input, base64 } => {
            cmd::convert::cmd_convert(&input, base64).map(|_| 0)
        }
        Commands::Version { verbose } => cmd::util::cmd_version(verbose).map(|_| 0),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_deref()).map(|_| 0),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell).map(|_| 0),
    }
}
