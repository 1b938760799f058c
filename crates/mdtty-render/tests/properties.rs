//! Property tests for the guarantees table layout relies on.

use mdtty_render::{render_inline, render_to_string, visible_width, OutputMode, StyleSink};
use proptest::prelude::*;

fn inline_text(src: &[u8]) -> String {
    let mut sink = StyleSink::new(Vec::new(), OutputMode::Text);
    render_inline(src, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

/// Fragments dense in markers, backticks and multi-byte characters.
fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("*".to_string()),
            Just("**".to_string()),
            Just("***".to_string()),
            Just("_".to_string()),
            Just("`".to_string()),
            "[a-zñé─ ]{0,4}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn alignment() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("---"), Just(":--"), Just(":-:"), Just("--:")]
}

proptest! {
    #[test]
    fn width_matches_rendered_codepoints(src in markup()) {
        let rendered = inline_text(src.as_bytes());
        prop_assert_eq!(visible_width(src.as_bytes()), rendered.chars().count());
    }

    #[test]
    fn width_matches_for_arbitrary_text(src in "\\PC{0,40}") {
        let rendered = inline_text(src.as_bytes());
        prop_assert_eq!(visible_width(src.as_bytes()), rendered.chars().count());
    }

    #[test]
    fn marker_free_text_is_unchanged(src in "[^*_`\n\r]{0,60}") {
        prop_assert_eq!(inline_text(src.as_bytes()), src);
    }

    #[test]
    fn table_lines_share_one_width(
        header in prop::collection::vec(markup(), 1..5),
        rows in prop::collection::vec(prop::collection::vec(markup(), 0..6), 0..5),
        aligns in prop::collection::vec(alignment(), 5),
    ) {
        let columns = header.len();
        let mut doc = format!("| {} |\n", header.join(" | "));
        doc.push_str(&format!("| {} |\n", aligns[..columns].join(" | ")));
        for row in &rows {
            doc.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        let out = render_to_string(&doc, OutputMode::Term).unwrap();
        let widths: Vec<usize> = out.lines().map(console::measure_text_width).collect();

        prop_assert_eq!(widths.len(), rows.len() + 4);
        prop_assert!(widths.iter().all(|&w| w == widths[0]), "{:?}\n{}", widths, out);
    }
}
