//! Single-pass inline renderer for emphasis and code spans.
//!
//! The renderer walks the span once, left to right, and only looks ahead to
//! find a closing backtick or to measure a marker run:
//!
//! | Source        | Effect                                  |
//! |---------------|-----------------------------------------|
//! | `` `code` ``  | code colours, ` code `, reset           |
//! | `***x***`     | toggles bold + italic                   |
//! | `**x**`       | toggles bold                            |
//! | `*x*` / `_x_` | toggles italic                          |
//!
//! Only one emphasis state is tracked at a time. A marker run either closes
//! the state it names (when that exact state is active) or opens it,
//! replacing whatever was recorded. Mixed runs such as `*a **b** c*` are
//! therefore toggled flatly rather than nested.

use std::io::Write;

use crate::error::RenderError;
use crate::sink::{StyleSink, StyleToken};

/// The single active emphasis style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanState {
    #[default]
    None,
    Bold,
    Italic,
    BoldItalic,
}

impl SpanState {
    /// The state a marker run of `run` characters toggles.
    fn for_run(run: usize) -> SpanState {
        match run {
            3 => SpanState::BoldItalic,
            2 => SpanState::Bold,
            _ => SpanState::Italic,
        }
    }

    /// Tokens that switch this state on.
    pub fn tokens(&self) -> &'static [StyleToken] {
        match self {
            SpanState::None => &[],
            SpanState::Bold => &[StyleToken::Bold],
            SpanState::Italic => &[StyleToken::Italic],
            SpanState::BoldItalic => &[StyleToken::Bold, StyleToken::Italic],
        }
    }

    fn toggle<W: Write>(
        self,
        target: SpanState,
        sink: &mut StyleSink<W>,
    ) -> Result<SpanState, RenderError> {
        if self == target {
            sink.style(StyleToken::Reset)?;
            Ok(SpanState::None)
        } else {
            sink.styles(target.tokens())?;
            Ok(target)
        }
    }
}

/// Renders one line fragment of inline Markdown into `sink`.
///
/// Unclosed emphasis is reset at the end of the fragment, and a backtick
/// without a partner is printed literally.
///
/// # Example
///
/// ```rust
/// use mdtty_render::{render_inline, OutputMode, StyleSink};
///
/// let mut sink = StyleSink::new(Vec::new(), OutputMode::Text);
/// render_inline(b"a **bold** and `code`", &mut sink).unwrap();
/// assert_eq!(sink.into_inner(), b"a bold and  code ");
/// ```
pub fn render_inline<W: Write>(src: &[u8], sink: &mut StyleSink<W>) -> Result<(), RenderError> {
    let mut state = SpanState::None;
    let mut i = 0;

    while i < src.len() {
        match src[i] {
            b'`' => match closing_backtick(src, i) {
                Some(close) => {
                    sink.styles(&[StyleToken::CodeBg, StyleToken::CodeFg])?;
                    sink.text(b" ")?;
                    sink.text(&src[i + 1..close])?;
                    sink.text(b" ")?;
                    sink.style(StyleToken::Reset)?;
                    // The reset also cleared emphasis; put it back.
                    sink.styles(state.tokens())?;
                    i = close + 1;
                }
                None => {
                    sink.text(b"`")?;
                    i += 1;
                }
            },
            marker @ (b'*' | b'_') => {
                let run = marker_run(src, i, marker);
                state = state.toggle(SpanState::for_run(run), sink)?;
                i += run;
            }
            _ => {
                let end = next_special(src, i + 1);
                sink.text(&src[i..end])?;
                i = end;
            }
        }
    }

    if state != SpanState::None {
        sink.style(StyleToken::Reset)?;
    }
    Ok(())
}

/// Index of the backtick closing the one at `open`, if any.
pub(crate) fn closing_backtick(src: &[u8], open: usize) -> Option<usize> {
    src[open + 1..]
        .iter()
        .position(|&b| b == b'`')
        .map(|offset| open + 1 + offset)
}

/// Length of the run of `marker` starting at `start`, capped at three.
pub(crate) fn marker_run(src: &[u8], start: usize, marker: u8) -> usize {
    src[start..]
        .iter()
        .take(3)
        .take_while(|&&b| b == marker)
        .count()
}

fn next_special(src: &[u8], from: usize) -> usize {
    src[from..]
        .iter()
        .position(|&b| matches!(b, b'`' | b'*' | b'_'))
        .map_or(src.len(), |offset| from + offset)
}
