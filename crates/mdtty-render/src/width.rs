//! Visible width of raw inline Markdown.
//!
//! [`visible_width`] answers "how many columns will [`render_inline`] print
//! for this span", without rendering it. The two must agree byte for byte on
//! where markers start and end, so both use the same scanning helpers.
//!
//! Every codepoint counts as one column. Wide and combining characters are
//! not special-cased.
//!
//! [`render_inline`]: crate::render_inline

use crate::inline::{closing_backtick, marker_run};

/// Returns the number of terminal columns the rendered span occupies.
///
/// # Example
///
/// ```rust
/// use mdtty_render::visible_width;
///
/// assert_eq!(visible_width(b"plain"), 5);
/// assert_eq!(visible_width(b"**bold**"), 4);
/// assert_eq!(visible_width(b"`ls`"), 4); // " ls "
/// assert_eq!(visible_width("caf\u{e9}".as_bytes()), 4);
/// ```
pub fn visible_width(src: &[u8]) -> usize {
    let mut width = 0;
    let mut i = 0;

    while i < src.len() {
        match src[i] {
            b'`' => match closing_backtick(src, i) {
                Some(close) => {
                    width += 2 + codepoint_count(&src[i + 1..close]);
                    i = close + 1;
                }
                None => {
                    width += 1;
                    i += 1;
                }
            },
            marker @ (b'*' | b'_') => {
                i += marker_run(src, i, marker);
            }
            _ => {
                width += 1;
                i += codepoint_len(src, i);
            }
        }
    }

    width
}

/// Counts codepoints, treating each malformed byte as one.
pub fn codepoint_count(src: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < src.len() {
        i += codepoint_len(src, i);
        count += 1;
    }
    count
}

/// Length in bytes of the codepoint starting at `i`.
///
/// The length comes from the leading byte. If the lead is not a valid lead
/// byte, or the continuation bytes it announces are missing, the sequence is
/// treated as a single byte so scanning never skips over an ASCII marker.
pub(crate) fn codepoint_len(src: &[u8], i: usize) -> usize {
    let expected = sequence_len(src[i]);
    if expected == 1 || i + expected > src.len() {
        return 1;
    }
    if src[i + 1..i + expected].iter().all(|&b| is_continuation(b)) {
        expected
    } else {
        1
    }
}

/// Drops a trailing, incomplete UTF-8 sequence left behind by truncation.
pub(crate) fn trim_partial_codepoint(bytes: &mut Vec<u8>) {
    let len = bytes.len();
    for back in 1..=len.min(4) {
        let b = bytes[len - back];
        if !is_continuation(b) {
            if sequence_len(b) > back {
                bytes.truncate(len - back);
            }
            return;
        }
    }
}

fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

fn is_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}
