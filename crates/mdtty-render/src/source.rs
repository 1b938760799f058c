//! Pull-based line source with one line of lookahead.

use std::io::{self, BufRead};

use tracing::debug;

use crate::error::RenderError;
use crate::width::trim_partial_codepoint;

/// Reads terminator-stripped lines from a [`BufRead`], with [`peek`] to look
/// one line ahead without consuming it.
///
/// Lines longer than the configured maximum are cut at that many bytes
/// (backing off to a codepoint boundary) and the remainder of the physical
/// line is skipped. Memory use per line is bounded by the maximum, not by the
/// input.
///
/// [`peek`]: LineCursor::peek
#[derive(Debug)]
pub struct LineCursor<R> {
    reader: R,
    peeked: Option<Vec<u8>>,
    max_line_bytes: usize,
    line_no: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R, max_line_bytes: usize) -> Self {
        Self {
            reader,
            peeked: None,
            max_line_bytes: max_line_bytes.max(1),
            line_no: 0,
        }
    }

    /// Returns the next line, consuming it.
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>, RenderError> {
        match self.peeked.take() {
            Some(line) => Ok(Some(line)),
            None => self.read_line(),
        }
    }

    /// Returns the next line without consuming it.
    pub fn peek(&mut self) -> Result<Option<&[u8]>, RenderError> {
        if self.peeked.is_none() {
            self.peeked = self.read_line()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Drops the peeked line, if any.
    pub fn advance(&mut self) {
        self.peeked = None;
    }

    /// Number of physical lines read from the source so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> Result<Option<Vec<u8>>, RenderError> {
        let mut line = Vec::new();
        let mut read_any = false;
        let mut dropped = 0usize;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(RenderError::Read(err)),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let content = &available[..newline.unwrap_or(available.len())];
            let room = self.max_line_bytes.saturating_sub(line.len());
            let kept = content.len().min(room);
            line.extend_from_slice(&content[..kept]);
            dropped += content.len() - kept;

            let used = content.len() + usize::from(newline.is_some());
            self.reader.consume(used);
            if newline.is_some() {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }
        self.line_no += 1;

        if dropped > 0 {
            trim_partial_codepoint(&mut line);
            debug!(line = self.line_no, dropped, "truncated overlong line");
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
