//! # mdtty - Markdown in the terminal
//!
//! The command-line front end for [`mdtty_render`]. The binary is a thin
//! wrapper around [`cli::run`]; the pieces are exposed so the argument
//! handling can be tested without spawning a process.
//!
//! ```text
//! mdtty [OPTIONS] [FILE]...
//!
//!   --output <auto|term|text|term-debug>   styling (default: auto)
//!   -v, --verbose                          debug logging on stderr
//! ```

pub mod cli;
mod error;
mod logging;

pub use cli::{command, run, Options};
pub use error::CliError;
pub use logging::initialize_logging;
