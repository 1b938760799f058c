//! Style tokens and the output sink that turns them into escape sequences.
//!
//! Every rendering call writes through a [`StyleSink`]. The sink carries the
//! resolved [`OutputMode`], so whether styling is emitted is a property of the
//! value threaded through the renderer rather than of the process.
//!
//! # Example
//!
//! ```rust
//! use mdtty_render::{OutputMode, StyleSink, StyleToken};
//!
//! let mut sink = StyleSink::new(Vec::new(), OutputMode::Term);
//! sink.style(StyleToken::Bold).unwrap();
//! sink.text(b"hi").unwrap();
//! sink.style(StyleToken::Reset).unwrap();
//! assert_eq!(sink.into_inner(), b"\x1b[1mhi\x1b[0m");
//!
//! let mut sink = StyleSink::new(Vec::new(), OutputMode::Text);
//! sink.style(StyleToken::Bold).unwrap();
//! sink.text(b"hi").unwrap();
//! assert_eq!(sink.into_inner(), b"hi");
//! ```

use std::io::Write;

use console::Term;

use crate::error::RenderError;

/// Controls how style tokens reach the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Emit ANSI codes only when stdout is a colour-capable terminal.
    #[default]
    Auto,
    /// Always emit ANSI escape codes.
    Term,
    /// Never emit styling; only text and structural glyphs are written.
    Text,
    /// Render style tokens as bracket tags (`[bold]`, `[/]`) for inspection.
    TermDebug,
}

impl OutputMode {
    /// Resolves the output mode to a concrete decision about whether to use color.
    ///
    /// - `Auto` checks whether stdout is a terminal that supports colours
    /// - `Term` always returns `true`
    /// - `Text` and `TermDebug` return `false`
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
            OutputMode::TermDebug => false,
        }
    }

    /// Replaces `Auto` with `Term` or `Text`. Other modes are returned as-is.
    pub fn resolve(self) -> OutputMode {
        match self {
            OutputMode::Auto if self.should_use_color() => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => other,
        }
    }
}

/// One of the eight basic foreground colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// An abstract styling instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Fg(Color),
    /// Dark grey 256-colour background used behind inline code.
    CodeBg,
    /// Soft orange 256-colour foreground used for inline and fenced code.
    CodeFg,
}

impl StyleToken {
    /// The SGR escape sequence for this token.
    pub fn sgr(&self) -> &'static str {
        match self {
            StyleToken::Reset => "\x1b[0m",
            StyleToken::Bold => "\x1b[1m",
            StyleToken::Dim => "\x1b[2m",
            StyleToken::Italic => "\x1b[3m",
            StyleToken::Underline => "\x1b[4m",
            StyleToken::Fg(Color::Black) => "\x1b[30m",
            StyleToken::Fg(Color::Red) => "\x1b[31m",
            StyleToken::Fg(Color::Green) => "\x1b[32m",
            StyleToken::Fg(Color::Yellow) => "\x1b[33m",
            StyleToken::Fg(Color::Blue) => "\x1b[34m",
            StyleToken::Fg(Color::Magenta) => "\x1b[35m",
            StyleToken::Fg(Color::Cyan) => "\x1b[36m",
            StyleToken::Fg(Color::White) => "\x1b[37m",
            StyleToken::CodeBg => "\x1b[48;5;236m",
            StyleToken::CodeFg => "\x1b[38;5;215m",
        }
    }

    /// The bracket tag written in [`OutputMode::TermDebug`].
    pub fn debug_tag(&self) -> &'static str {
        match self {
            StyleToken::Reset => "[/]",
            StyleToken::Bold => "[bold]",
            StyleToken::Dim => "[dim]",
            StyleToken::Italic => "[italic]",
            StyleToken::Underline => "[underline]",
            StyleToken::Fg(Color::Black) => "[black]",
            StyleToken::Fg(Color::Red) => "[red]",
            StyleToken::Fg(Color::Green) => "[green]",
            StyleToken::Fg(Color::Yellow) => "[yellow]",
            StyleToken::Fg(Color::Blue) => "[blue]",
            StyleToken::Fg(Color::Magenta) => "[magenta]",
            StyleToken::Fg(Color::Cyan) => "[cyan]",
            StyleToken::Fg(Color::White) => "[white]",
            StyleToken::CodeBg => "[code-bg]",
            StyleToken::CodeFg => "[code]",
        }
    }
}

/// A byte sink that accepts text and style tokens.
///
/// Text is written verbatim in every mode. Style tokens become SGR escapes in
/// [`OutputMode::Term`], bracket tags in [`OutputMode::TermDebug`], and
/// nothing at all in [`OutputMode::Text`].
#[derive(Debug)]
pub struct StyleSink<W: Write> {
    out: W,
    mode: OutputMode,
}

impl<W: Write> StyleSink<W> {
    /// Creates a sink, resolving [`OutputMode::Auto`] once against stdout.
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode: mode.resolve(),
        }
    }

    pub fn style(&mut self, token: StyleToken) -> Result<(), RenderError> {
        match self.mode {
            OutputMode::Term => self.write(token.sgr().as_bytes()),
            OutputMode::TermDebug => self.write(token.debug_tag().as_bytes()),
            OutputMode::Text | OutputMode::Auto => Ok(()),
        }
    }

    /// Emits several tokens in order.
    pub fn styles(&mut self, tokens: &[StyleToken]) -> Result<(), RenderError> {
        for token in tokens {
            self.style(*token)?;
        }
        Ok(())
    }

    /// Writes raw bytes unchanged.
    pub fn text(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        self.write(bytes)
    }

    /// Writes `glyph` `count` times.
    pub fn repeat(&mut self, glyph: &str, count: usize) -> Result<(), RenderError> {
        for _ in 0..count {
            self.write(glyph.as_bytes())?;
        }
        Ok(())
    }

    pub fn spaces(&mut self, count: usize) -> Result<(), RenderError> {
        self.repeat(" ", count)
    }

    pub fn newline(&mut self) -> Result<(), RenderError> {
        self.write(b"\n")
    }

    pub fn flush(&mut self) -> Result<(), RenderError> {
        self.out.flush().map_err(RenderError::Write)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        self.out.write_all(bytes).map_err(RenderError::Write)
    }
}
