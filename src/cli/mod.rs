//! # CLI Module
//!
//! Command-line driver for the generator, available as the `gatewaygen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! gatewaygen generate --descriptor greeter.yaml --output src/greeter_gateway.rs
//! ```
//!
//! Options:
//! - `--descriptor <FILE>` - Descriptor (required)
//! - `--output <FILE>` - Where to write; stdout when omitted
//! - `--config <FILE>` - `gatewaygen.toml`, auto-detected next to the descriptor
//! - `--api-doc <FILE>` - Documentation file to embed
//! - `--dry-run` - Render without writing
//! - `--no-fmt` - Skip rustfmt
//!
//! ### `lint`
//!
//! ```bash
//! gatewaygen lint --descriptor greeter.yaml --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! ```bash
//! gatewaygen inspect --descriptor greeter.yaml
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use gatewaygen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;
mod format;


pub use commands::{generate_source, inspect_lines, prepare, run_cli, Cli, Commands};
pub use format::format_file;
