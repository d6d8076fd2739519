//! # prlint - Pull-request description validator
//!
//! prlint checks that a pull request's description fills in the three
//! required sections of the PR template before the change is reviewed.
//!
//! ## Overview
//!
//! A CI step converts the PR body from markdown into a section structure,
//! base64-encodes it as JSON and hands it to `prlint check` through an
//! environment variable. prlint decodes it, runs one check per section and
//! exits nonzero if any section fails.
//!
//! ## Modules
//!
//! - [`description`] - Section/Block/ListItem model and payload decoding
//! - [`checks`] - The three section checks and their failure kinds
//! - [`report`] - Aggregation, rendering and exit status
//! - [`markdown`] - Markdown body to section structure conversion
//! - [`config`] - Optional `.prlint/config.md` project configuration
//! - [`ui`] - Output glyphs and quiet-mode diagnostics
//!
//! ## Example
//!
//! ```no_run
//! use prlint::config::Config;
//! use prlint::description::ParsedDescription;
//! use prlint::report::Report;
//!
//! let config = Config::load().expect("Failed to load config");
//! let description = ParsedDescription::from_env(&config.input_env)
//!     .expect("Failed to decode description");
//!
//! let report = Report::build(&description, &config.rules());
//! println!("{}", report.render_text());
//! std::process::exit(report.exit_code());
//! ```

pub mod checks;
pub mod config;
pub mod description;
pub mod markdown;
pub mod report;
pub mod ui;
