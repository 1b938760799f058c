//! Errors reported by the `mdtty` binary.

use std::io;

use mdtty_render::RenderError;

/// A failure that ends the run with exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A named input file could not be opened.
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading or rendering an opened input failed.
    #[error("{name}: {source}")]
    Render {
        name: String,
        #[source]
        source: RenderError,
    },

    /// Flushing rendered output failed.
    #[error("write failed: {0}")]
    Flush(#[source] io::Error),
}

impl CliError {
    /// True when stdout was closed by its reader, which is not a failure.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CliError::Render { source, .. } => source.is_broken_pipe(),
            CliError::Flush(err) => err.kind() == io::ErrorKind::BrokenPipe,
            CliError::Open { .. } => false,
        }
    }
}
