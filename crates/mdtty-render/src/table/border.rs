//! Box-drawing borders around table rows.

use std::io::Write;

use crate::error::RenderError;
use crate::sink::{StyleSink, StyleToken};

/// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub left_t: &'static str,
    pub cross: &'static str,
    pub right_t: &'static str,
    pub top_t: &'static str,
    pub bottom_t: &'static str,
}

pub(crate) const LIGHT: BorderChars = BorderChars {
    horizontal: "─",
    vertical: "│",
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    left_t: "├",
    cross: "┼",
    right_t: "┤",
    top_t: "┬",
    bottom_t: "┴",
};

/// Which horizontal line is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    fn ends(&self, line: LineType) -> (&'static str, &'static str, &'static str) {
        match line {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        }
    }

    /// Draws a dim horizontal line with a joint at every column boundary.
    ///
    /// Each column segment is its content width plus one padding column on
    /// either side.
    pub(crate) fn horizontal_line<W: Write>(
        &self,
        line: LineType,
        widths: &[usize],
        sink: &mut StyleSink<W>,
    ) -> Result<(), RenderError> {
        let (left, joint, right) = self.ends(line);

        sink.style(StyleToken::Dim)?;
        sink.text(left.as_bytes())?;
        for (i, width) in widths.iter().enumerate() {
            sink.repeat(self.horizontal, width + 2)?;
            let end = if i + 1 < widths.len() { joint } else { right };
            sink.text(end.as_bytes())?;
        }
        sink.style(StyleToken::Reset)?;
        sink.newline()
    }

    /// Draws a dim vertical bar.
    pub(crate) fn bar<W: Write>(&self, sink: &mut StyleSink<W>) -> Result<(), RenderError> {
        sink.style(StyleToken::Dim)?;
        sink.text(self.vertical.as_bytes())?;
        sink.style(StyleToken::Reset)
    }
}
