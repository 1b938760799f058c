//! Pipe-delimited row parsing.

use tracing::debug;

use super::Alignment;
use crate::limits::Limits;
use crate::width::trim_partial_codepoint;

/// A single trimmed table cell.
pub type Cell = Vec<u8>;

/// Splits a `| a | b |` line into trimmed cells.
///
/// One leading pipe is optional. A trailing pipe ends the last cell without
/// starting a new one. Escaped pipes are not recognised. At most
/// [`Limits::get_max_columns`] cells are returned, each cut to
/// [`Limits::get_max_cell_bytes`].
///
/// # Example
///
/// ```rust
/// use mdtty_render::{split_row, Limits};
///
/// let cells = split_row(b"| a |  b c |", &Limits::default());
/// assert_eq!(cells, vec![b"a".to_vec(), b"b c".to_vec()]);
/// ```
pub fn split_row(line: &[u8], limits: &Limits) -> Vec<Cell> {
    let mut rest = line.strip_prefix(b"|").unwrap_or(line);
    let mut cells = Vec::new();

    while !rest.is_empty() && cells.len() < limits.get_max_columns() {
        let end = rest.iter().position(|&b| b == b'|').unwrap_or(rest.len());
        cells.push(bounded_cell(trim_spaces(&rest[..end]), limits));
        rest = rest.get(end + 1..).unwrap_or_default();
    }

    if !rest.is_empty() {
        debug!(max = limits.get_max_columns(), "dropped table columns past limit");
    }
    cells
}

/// Reads column alignments from a separator row such as `|---|:-:|--:|`.
///
/// Returns `None` unless the row has exactly `columns` cells and every cell
/// is non-empty and made only of `-` and `:`.
pub fn parse_separator(line: &[u8], columns: usize, limits: &Limits) -> Option<Vec<Alignment>> {
    let cells = split_row(line, limits);
    if cells.len() != columns {
        return None;
    }

    cells
        .iter()
        .map(|cell| {
            if cell.is_empty() || !cell.iter().all(|&b| b == b'-' || b == b':') {
                return None;
            }
            let left = cell.first() == Some(&b':');
            let right = cell.last() == Some(&b':');
            Some(match (left, right) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                _ => Alignment::Left,
            })
        })
        .collect()
}

fn trim_spaces(mut cell: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = cell {
        cell = rest;
    }
    while let [rest @ .., b' '] = cell {
        cell = rest;
    }
    cell
}

fn bounded_cell(cell: &[u8], limits: &Limits) -> Cell {
    let max = limits.get_max_cell_bytes();
    if cell.len() <= max {
        return cell.to_vec();
    }
    let mut bounded = cell[..max].to_vec();
    trim_partial_codepoint(&mut bounded);
    debug!(bytes = cell.len(), max, "truncated table cell");
    bounded
}
