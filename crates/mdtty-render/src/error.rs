//! Error types for rendering.
//!
//! Malformed Markdown is never an error: unclosed spans are closed at the end
//! of the line and invalid tables fall back to paragraphs. Only the I/O on
//! either side of the renderer can fail.

use std::io;

/// Errors that can occur while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Reading from the line source failed.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing to the output sink failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl RenderError {
    /// Returns true when the output side was closed by the reader
    /// (for example `mdtty doc.md | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RenderError::Write(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}
