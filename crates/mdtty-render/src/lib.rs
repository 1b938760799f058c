//! # mdtty-render - Markdown for the terminal
//!
//! `mdtty-render` turns line-oriented Markdown into text interleaved with ANSI
//! styling, keeping table columns aligned even though emphasis markers vanish
//! and multi-byte characters take one column each.
//!
//! ## Core Concepts
//!
//! - [`MarkdownRenderer`]: renders a whole document from any [`BufRead`]
//! - [`OutputMode`]: whether styling is emitted (Auto/Term/Text/TermDebug)
//! - [`StyleSink`]: the byte sink every renderer writes through
//! - [`render_inline`] and [`visible_width`]: the inline renderer and the
//!   width calculator that must agree with it
//! - [`Table`]: two-pass pipe table layout
//! - [`Limits`]: bounds on buffered lines, cells, columns and rows
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtty_render::{MarkdownRenderer, OutputMode};
//!
//! let doc = "## Stock\n| Item | Qty |\n| ---- | --: |\n| tea  |   2 |\n";
//!
//! let out = MarkdownRenderer::new(OutputMode::Text).render_str(doc).unwrap();
//! assert_eq!(
//!     out,
//!     "\nStock\n\
//!      ┌──────┬─────┐\n\
//!      │ Item │ Qty │\n\
//!      ├──────┼─────┤\n\
//!      │ tea  │   2 │\n\
//!      └──────┴─────┘\n"
//! );
//! ```
//!
//! ## Width Invariant
//!
//! [`visible_width`] of a span always equals the number of codepoints
//! [`render_inline`] prints for it in [`OutputMode::Text`]. Table layout
//! depends on this.
//!
//! ```rust
//! use mdtty_render::{render_inline, visible_width, OutputMode, StyleSink};
//!
//! let src = b"**bold** `code` _it_";
//! let mut sink = StyleSink::new(Vec::new(), OutputMode::Text);
//! render_inline(src, &mut sink).unwrap();
//! let printed = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(printed.chars().count(), visible_width(src));
//! ```

use std::io::{BufRead, Write};

mod block;
mod error;
mod inline;
mod limits;
mod sink;
mod source;
pub mod table;
mod width;

pub use block::{classify, Block, BlockRenderer};
pub use error::RenderError;
pub use inline::{render_inline, SpanState};
pub use limits::Limits;
pub use sink::{Color, OutputMode, StyleSink, StyleToken};
pub use source::LineCursor;
pub use table::{parse_separator, split_row, Alignment, Table};
pub use width::{codepoint_count, visible_width};

/// Renders whole documents with a fixed output mode and limits.
///
/// # Example
///
/// ```rust
/// use mdtty_render::{MarkdownRenderer, OutputMode, Limits};
///
/// let renderer = MarkdownRenderer::new(OutputMode::Text)
///     .limits(Limits::default().rule_width(3));
///
/// let out = renderer.render("- **one**\n---\n".as_bytes(), Vec::new()).unwrap();
/// assert_eq!(out, "  • one\n───\n".as_bytes());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownRenderer {
    mode: OutputMode,
    limits: Limits,
}

impl MarkdownRenderer {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            limits: Limits::default(),
        }
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Renders every line of `input` into `output` and returns the writer.
    ///
    /// [`OutputMode::Auto`] is resolved once per call.
    pub fn render<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<W, RenderError> {
        let mut sink = StyleSink::new(output, self.mode);
        let mut cursor = LineCursor::new(input, self.limits.get_max_line_bytes());
        BlockRenderer::new(&mut sink, self.limits).render(&mut cursor)?;
        sink.flush()?;
        Ok(sink.into_inner())
    }

    /// Renders a string into a new string.
    pub fn render_str(&self, input: &str) -> Result<String, RenderError> {
        let bytes = self.render(input.as_bytes(), Vec::new())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Renders `input` with default limits.
///
/// ```rust
/// use mdtty_render::{render_to_string, OutputMode};
///
/// assert_eq!(render_to_string("> *quoted*", OutputMode::Text).unwrap(), "│ quoted\n");
/// ```
pub fn render_to_string(input: &str, mode: OutputMode) -> Result<String, RenderError> {
    MarkdownRenderer::new(mode).render_str(input)
}
