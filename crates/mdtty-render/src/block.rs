//! Line classification and block-level rendering.
//!
//! Blocks are recognised one line at a time. The only state carried between
//! lines is whether a fenced code block is open, plus the cursor's one line
//! of lookahead used to confirm that a pipe row starts a table.
//!
//! Outside a fence, lines are tried in this order:
//!
//! | Line                         | Block                     |
//! |------------------------------|---------------------------|
//! | ```` ```lang ````            | fence open/close          |
//! | (empty)                      | blank line                |
//! | `---`, `***`, `===` (3+)     | horizontal rule           |
//! | `\| a \|` + separator line   | table                     |
//! | `#`..`######` + space        | heading                   |
//! | `>` + space or end           | block quote               |
//! | `-`, `*`, `+` + space        | bullet item               |
//! | digits + `. `                | numbered item             |
//! | anything else                | paragraph line            |

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::RenderError;
use crate::inline::render_inline;
use crate::limits::Limits;
use crate::sink::{Color, StyleSink, StyleToken};
use crate::source::LineCursor;
use crate::table::Table;
use crate::width::visible_width;

const FENCE: &[u8] = b"```";

/// What a single line looks like, outside of a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// A fence delimiter; `info` is whatever follows the backticks.
    Fence { info: &'a [u8] },
    Blank,
    Rule,
    /// A pipe-prefixed line. Becomes a table only if the next line is a
    /// valid separator, otherwise it renders as a paragraph.
    PipeRow,
    Heading { level: usize, text: &'a [u8] },
    Quote { text: &'a [u8] },
    Bullet { text: &'a [u8] },
    Numbered { number: &'a [u8], text: &'a [u8] },
    Paragraph,
}

impl Block<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Block::Fence { .. } => "fence",
            Block::Blank => "blank",
            Block::Rule => "rule",
            Block::PipeRow => "pipe-row",
            Block::Heading { .. } => "heading",
            Block::Quote { .. } => "quote",
            Block::Bullet { .. } => "bullet",
            Block::Numbered { .. } => "numbered",
            Block::Paragraph => "paragraph",
        }
    }
}

/// Classifies a line by its leading bytes.
///
/// # Example
///
/// ```rust
/// use mdtty_render::{classify, Block};
///
/// assert_eq!(classify(b"## Setup"), Block::Heading { level: 2, text: b"Setup" });
/// assert_eq!(classify(b"---"), Block::Rule);
/// assert_eq!(classify(b"#nospace"), Block::Paragraph);
/// ```
pub fn classify(line: &[u8]) -> Block<'_> {
    if let Some(info) = line.strip_prefix(FENCE) {
        return Block::Fence { info };
    }
    if line.is_empty() {
        return Block::Blank;
    }
    if is_rule(line) {
        return Block::Rule;
    }
    if line[0] == b'|' {
        return Block::PipeRow;
    }
    if let Some(block) = heading(line) {
        return block;
    }
    match line {
        [b'>'] => return Block::Quote { text: b"" },
        [b'>', b' ', text @ ..] => return Block::Quote { text },
        [b'-' | b'*' | b'+', b' ', text @ ..] => return Block::Bullet { text },
        _ => {}
    }
    if let Some(block) = numbered(line) {
        return block;
    }
    Block::Paragraph
}

fn is_rule(line: &[u8]) -> bool {
    matches!(line[0], b'-' | b'*' | b'=') && line.len() >= 3 && line.iter().all(|&b| b == line[0])
}

fn heading(line: &[u8]) -> Option<Block<'_>> {
    let level = line.iter().take_while(|&&b| b == b'#').count();
    if !(1..=6).contains(&level) || line.get(level) != Some(&b' ') {
        return None;
    }
    Some(Block::Heading {
        level,
        text: &line[level + 1..],
    })
}

fn numbered(line: &[u8]) -> Option<Block<'_>> {
    let digits = line.iter().take_while(|b| b.is_ascii_digit()).count();
    match &line[digits..] {
        [b'.', b' ', text @ ..] if digits > 0 => Some(Block::Numbered {
            number: &line[..digits],
            text,
        }),
        _ => None,
    }
}

/// Drives classification and rendering for one document.
pub struct BlockRenderer<'s, W: Write> {
    sink: &'s mut StyleSink<W>,
    limits: Limits,
    in_fence: bool,
}

impl<'s, W: Write> BlockRenderer<'s, W> {
    pub fn new(sink: &'s mut StyleSink<W>, limits: Limits) -> Self {
        Self {
            sink,
            limits,
            in_fence: false,
        }
    }

    /// Renders every remaining line of `cursor`.
    ///
    /// A fence left open at end of input is closed with a style reset.
    pub fn render<R: BufRead>(&mut self, cursor: &mut LineCursor<R>) -> Result<(), RenderError> {
        while let Some(line) = cursor.next_line()? {
            self.render_line(&line, cursor)?;
        }
        if self.in_fence {
            debug!("input ended inside a fenced block");
            self.sink.style(StyleToken::Reset)?;
            self.in_fence = false;
        }
        Ok(())
    }

    fn render_line<R: BufRead>(
        &mut self,
        line: &[u8],
        cursor: &mut LineCursor<R>,
    ) -> Result<(), RenderError> {
        if self.in_fence {
            return match line.strip_prefix(FENCE) {
                Some(_) => self.close_fence(),
                None => self.fenced_line(line),
            };
        }

        let block = classify(line);
        trace!(line = cursor.lines_read(), block = block.name(), "classified");

        match block {
            Block::Fence { info } => self.open_fence(info),
            Block::Blank => self.sink.newline(),
            Block::Rule => self.rule(),
            Block::PipeRow => {
                let table = match cursor.peek()? {
                    Some(next) => Table::from_lines(line, next, &self.limits),
                    None => None,
                };
                match table {
                    Some(table) => {
                        cursor.advance();
                        self.table(table, cursor)
                    }
                    None => self.paragraph(line),
                }
            }
            Block::Heading { level, text } => self.heading(level, text),
            Block::Quote { text } => self.quote(text),
            Block::Bullet { text } => self.bullet(text),
            Block::Numbered { number, text } => self.numbered(number, text),
            Block::Paragraph => self.paragraph(line),
        }
    }

    fn open_fence(&mut self, info: &[u8]) -> Result<(), RenderError> {
        self.in_fence = true;
        let info = info.trim_ascii();
        debug!(lang = %String::from_utf8_lossy(info), "fence opened");

        if !info.is_empty() {
            self.sink
                .styles(&[StyleToken::Dim, StyleToken::Fg(Color::Green)])?;
            self.sink.text(b"[")?;
            self.sink.text(info)?;
            self.sink.text(b"]")?;
            self.sink.style(StyleToken::Reset)?;
        }
        self.sink.newline()
    }

    fn close_fence(&mut self) -> Result<(), RenderError> {
        self.in_fence = false;
        self.sink.newline()
    }

    fn fenced_line(&mut self, line: &[u8]) -> Result<(), RenderError> {
        self.sink.style(StyleToken::CodeFg)?;
        self.sink.spaces(2)?;
        self.sink.text(line)?;
        self.sink.style(StyleToken::Reset)?;
        self.sink.newline()
    }

    fn rule(&mut self) -> Result<(), RenderError> {
        self.sink.style(StyleToken::Dim)?;
        self.sink.repeat("─", self.limits.get_rule_width())?;
        self.sink.style(StyleToken::Reset)?;
        self.sink.newline()
    }

    fn table<R: BufRead>(
        &mut self,
        mut table: Table,
        cursor: &mut LineCursor<R>,
    ) -> Result<(), RenderError> {
        table.read_body(cursor, &self.limits)?;
        debug!(
            columns = table.columns(),
            rows = table.rows().len(),
            "rendering table"
        );
        table.render(self.sink)
    }

    fn heading(&mut self, level: usize, text: &[u8]) -> Result<(), RenderError> {
        self.sink.newline()?;
        let style: &[StyleToken] = match level {
            1 => &[
                StyleToken::Bold,
                StyleToken::Fg(Color::Cyan),
                StyleToken::Underline,
            ],
            2 => &[StyleToken::Bold, StyleToken::Fg(Color::Yellow)],
            _ => &[StyleToken::Bold, StyleToken::Fg(Color::Magenta)],
        };
        self.sink.styles(style)?;
        render_inline(text, self.sink)?;
        self.sink.style(StyleToken::Reset)?;
        self.sink.newline()?;

        if level == 1 {
            self.sink
                .styles(&[StyleToken::Fg(Color::Cyan), StyleToken::Dim])?;
            self.sink.repeat("═", visible_width(text) + 2)?;
            self.sink.style(StyleToken::Reset)?;
            self.sink.newline()?;
        }
        Ok(())
    }

    fn quote(&mut self, text: &[u8]) -> Result<(), RenderError> {
        self.sink
            .styles(&[StyleToken::Fg(Color::Green), StyleToken::Dim])?;
        self.sink.text("│ ".as_bytes())?;
        self.sink.style(StyleToken::Reset)?;
        self.sink
            .styles(&[StyleToken::Italic, StyleToken::Fg(Color::Green)])?;
        render_inline(text, self.sink)?;
        self.sink.style(StyleToken::Reset)?;
        self.sink.newline()
    }

    fn bullet(&mut self, text: &[u8]) -> Result<(), RenderError> {
        self.marker("• ".as_bytes(), b"")?;
        render_inline(text, self.sink)?;
        self.sink.newline()
    }

    fn numbered(&mut self, number: &[u8], text: &[u8]) -> Result<(), RenderError> {
        self.marker(number, b". ")?;
        render_inline(text, self.sink)?;
        self.sink.newline()
    }

    /// Indented, bold yellow list marker.
    fn marker(&mut self, marker: &[u8], suffix: &[u8]) -> Result<(), RenderError> {
        self.sink.spaces(2)?;
        self.sink
            .styles(&[StyleToken::Fg(Color::Yellow), StyleToken::Bold])?;
        self.sink.text(marker)?;
        self.sink.text(suffix)?;
        self.sink.style(StyleToken::Reset)
    }

    fn paragraph(&mut self, line: &[u8]) -> Result<(), RenderError> {
        render_inline(line, self.sink)?;
        self.sink.newline()
    }
}
