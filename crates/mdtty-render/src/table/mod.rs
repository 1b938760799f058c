//! GitHub-style pipe tables.
//!
//! A table is drawn in two passes: every body row is buffered first so that
//! each column can be sized to its widest cell, then the whole table is
//! drawn with light box-drawing borders.
//!
//! ```text
//! | Name | Qty |          ┌──────┬─────┐
//! | ---- | --: |    →     │ Name │ Qty │
//! | tea  |   2 |          ├──────┼─────┤
//!                         │ tea  │   2 │
//!                         └──────┴─────┘
//! ```
//!
//! Widths are measured with [`visible_width`] on the raw cell source, so
//! emphasis markers and code padding are accounted for exactly as
//! [`render_inline`] prints them.

mod border;
mod row;

use std::io::{BufRead, Write};

use tracing::debug;

pub use row::{parse_separator, split_row, Cell};

use crate::error::RenderError;
use crate::inline::render_inline;
use crate::limits::Limits;
use crate::sink::{Color, StyleSink, StyleToken};
use crate::source::LineCursor;
use crate::width::visible_width;
use border::{LineType, LIGHT};

/// Narrowest column drawn, in terminal columns.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Horizontal alignment of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Splits `pad` spaces into (left, right). Center puts the odd space on
    /// the right.
    fn split(self, pad: usize) -> (usize, usize) {
        match self {
            Alignment::Left => (0, pad),
            Alignment::Center => (pad / 2, pad - pad / 2),
            Alignment::Right => (pad, 0),
        }
    }
}

/// A buffered table: header, per-column alignment and body rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    header: Vec<Cell>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<Cell>>,
    max_rows: usize,
}

impl Table {
    /// Starts a table from a header line and the line after it.
    ///
    /// Returns `None` when `separator` does not start with a pipe, does not
    /// have one cell per header cell, or contains anything but `-` and `:`.
    pub fn from_lines(header: &[u8], separator: &[u8], limits: &Limits) -> Option<Table> {
        if !separator.starts_with(b"|") {
            return None;
        }
        let header = split_row(header, limits);
        if header.is_empty() {
            return None;
        }
        let alignments = parse_separator(separator, header.len(), limits)?;
        Some(Table {
            header,
            alignments,
            rows: Vec::new(),
            max_rows: limits.get_max_rows(),
        })
    }

    pub fn columns(&self) -> usize {
        self.header.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Whether the row limit has been reached.
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.max_rows
    }

    /// Adds a body row. Returns false (and drops the row) once the table is
    /// full.
    pub fn push_row(&mut self, line: &[u8], limits: &Limits) -> bool {
        if self.is_full() {
            return false;
        }
        self.rows.push(split_row(line, limits));
        true
    }

    /// Buffers pipe-prefixed lines from `cursor` as body rows.
    ///
    /// Stops at the first line that does not start with `|`, at end of input,
    /// or when the table is full. The line that stopped the table is left
    /// unconsumed in the cursor.
    pub fn read_body<R: BufRead>(
        &mut self,
        cursor: &mut LineCursor<R>,
        limits: &Limits,
    ) -> Result<(), RenderError> {
        while !self.is_full() {
            match cursor.peek()? {
                Some(line) if line.starts_with(b"|") => {
                    self.push_row(line, limits);
                    cursor.advance();
                }
                _ => return Ok(()),
            }
        }
        debug!(rows = self.rows.len(), "table row limit reached");
        Ok(())
    }

    /// The width of every column: the widest visible cell, at least
    /// [`MIN_COLUMN_WIDTH`].
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.columns())
            .map(|col| {
                let body = self.rows.iter().map(|row| cell_width(row, col));
                body.chain([cell_width(&self.header, col)])
                    .fold(MIN_COLUMN_WIDTH, usize::max)
            })
            .collect()
    }

    /// Draws the table: top border, header, separator, body, bottom border.
    pub fn render<W: Write>(&self, sink: &mut StyleSink<W>) -> Result<(), RenderError> {
        let widths = self.column_widths();

        LIGHT.horizontal_line(LineType::Top, &widths, sink)?;
        self.render_row(&self.header, &widths, true, sink)?;
        LIGHT.horizontal_line(LineType::Middle, &widths, sink)?;
        for row in &self.rows {
            self.render_row(row, &widths, false, sink)?;
        }
        LIGHT.horizontal_line(LineType::Bottom, &widths, sink)
    }

    fn render_row<W: Write>(
        &self,
        cells: &[Cell],
        widths: &[usize],
        is_header: bool,
        sink: &mut StyleSink<W>,
    ) -> Result<(), RenderError> {
        LIGHT.bar(sink)?;
        for (col, &width) in widths.iter().enumerate() {
            let cell = cells.get(col).map(Vec::as_slice).unwrap_or_default();
            let (left, right) = self.alignments[col].split(width.saturating_sub(visible_width(cell)));

            sink.spaces(1)?;
            if is_header {
                sink.styles(&[StyleToken::Bold, StyleToken::Fg(Color::Cyan)])?;
            }
            sink.spaces(left)?;
            render_inline(cell, sink)?;
            sink.spaces(right)?;
            if is_header {
                sink.style(StyleToken::Reset)?;
            }
            sink.spaces(1)?;
            LIGHT.bar(sink)?;
        }
        sink.newline()
    }
}

fn cell_width(cells: &[Cell], col: usize) -> usize {
    cells.get(col).map_or(0, |cell| visible_width(cell))
}
