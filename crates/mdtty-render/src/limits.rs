//! Bounds on buffered input.
//!
//! The renderer only ever buffers one line, one lookahead line and one table.
//! [`Limits`] caps each of those so that pathological input is truncated
//! instead of growing memory without bound.

/// Size limits applied while reading and laying out a document.
///
/// # Example
///
/// ```rust
/// use mdtty_render::Limits;
///
/// let limits = Limits::default().max_columns(8).rule_width(40);
/// assert_eq!(limits.get_max_columns(), 8);
/// assert_eq!(limits.get_max_rows(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_line_bytes: usize,
    max_columns: usize,
    max_cell_bytes: usize,
    max_rows: usize,
    rule_width: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_bytes: 4096,
            max_columns: 16,
            max_cell_bytes: 127,
            max_rows: 256,
            rule_width: 60,
        }
    }
}

impl Limits {
    /// Bytes kept per input line; the rest of an overlong line is discarded.
    pub fn max_line_bytes(mut self, bytes: usize) -> Self {
        self.max_line_bytes = bytes.max(1);
        self
    }

    /// Cells kept per table row.
    pub fn max_columns(mut self, columns: usize) -> Self {
        self.max_columns = columns.max(1);
        self
    }

    /// Bytes kept per table cell after trimming.
    pub fn max_cell_bytes(mut self, bytes: usize) -> Self {
        self.max_cell_bytes = bytes;
        self
    }

    /// Body rows buffered per table. Further pipe lines are classified again
    /// from scratch once the table has been drawn.
    pub fn max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows;
        self
    }

    /// Length of a horizontal rule in columns.
    pub fn rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    pub fn get_max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    pub fn get_max_columns(&self) -> usize {
        self.max_columns
    }

    pub fn get_max_cell_bytes(&self) -> usize {
        self.max_cell_bytes
    }

    pub fn get_max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn get_rule_width(&self) -> usize {
        self.rule_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let limits = Limits::default();
        assert_eq!(limits.get_max_line_bytes(), 4096);
        assert_eq!(limits.get_max_columns(), 16);
        assert_eq!(limits.get_max_cell_bytes(), 127);
        assert_eq!(limits.get_max_rows(), 256);
        assert_eq!(limits.get_rule_width(), 60);
    }

    #[test]
    fn builder_overrides() {
        let limits = Limits::default().max_rows(2).max_cell_bytes(5).max_line_bytes(10);
        assert_eq!(limits.get_max_rows(), 2);
        assert_eq!(limits.get_max_cell_bytes(), 5);
        assert_eq!(limits.get_max_line_bytes(), 10);
    }

    #[test]
    fn zero_line_and_column_limits_are_clamped() {
        let limits = Limits::default().max_line_bytes(0).max_columns(0);
        assert_eq!(limits.get_max_line_bytes(), 1);
        assert_eq!(limits.get_max_columns(), 1);
    }
}
