use mdtty_render::{render_to_string, Limits, MarkdownRenderer, OutputMode};

fn text(input: &str) -> String {
    render_to_string(input, OutputMode::Text).unwrap()
}

fn term(input: &str) -> String {
    render_to_string(input, OutputMode::Term).unwrap()
}

#[test]
fn test_full_document_text_output() {
    let doc = "\
Some **bold** and `code`.

| Name | Score |
| :--- | ----: |
| ana  | 10 |
| *bo* | 7 |

- first
2. second
> note
";

    insta::assert_snapshot!(text(doc), @r"
Some bold and  code .

┌──────┬───────┐
│ Name │ Score │
├──────┼───────┤
│ ana  │    10 │
│ bo   │     7 │
└──────┴───────┘

  • first
  2. second
│ note
");
}

#[test]
fn test_level_two_heading_then_table() {
    let out = text("## Stock\n| Item | Qty |\n| ---- | --: |\n| tea  |   2 |\n");
    assert_eq!(
        out,
        "\nStock\n\
         ┌──────┬─────┐\n\
         │ Item │ Qty │\n\
         ├──────┼─────┤\n\
         │ tea  │   2 │\n\
         └──────┴─────┘\n"
    );
}

#[test]
fn test_bold_emits_one_on_and_one_off() {
    let out = term("**bold**");
    assert_eq!(out, "\x1b[1mbold\x1b[0m\n");
    assert_eq!(out.matches("\x1b[").count(), 2);
}

#[test]
fn test_code_is_framed_inside_emphasis() {
    let out = term("*a `code` b*");
    assert!(out.contains("\x1b[48;5;236m\x1b[38;5;215m code \x1b[0m\x1b[3m"));
}

#[test]
fn test_spec_example_table() {
    let out = text("| A | B |\n| --- | :---: |\n| x | y |\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "┌─────┬─────┐",
            "│ A   │  B  │",
            "├─────┼─────┤",
            "│ x   │  y  │",
            "└─────┴─────┘",
        ]
    );
}

#[test]
fn test_table_columns_align_with_styling() {
    let doc = "| Key | Value |\n|---|:-:|\n| **a** | `x` |\n| ñ | _long value_ |\n";
    let out = term(doc);
    let widths: Vec<usize> = out.lines().map(console::measure_text_width).collect();
    assert_eq!(widths.len(), 6);
    assert!(widths.iter().all(|&w| w == widths[0]), "{widths:?}\n{out}");
}

#[test]
fn test_failed_table_keeps_lookahead() {
    // The second line is not a separator, so it must still be classified
    // on its own: here as a heading.
    let out = text("| not | a table |\n## Heading\nbody");
    assert_eq!(out, "| not | a table |\n\nHeading\nbody\n");
}

#[test]
fn test_table_hands_back_terminating_line() {
    let out = text("| A |\n|---|\n| 1 |\n# After");
    assert!(out.ends_with("└─────┘\n\nAfter\n═══════\n"), "{out}");
}

#[test]
fn test_fence_suspends_markup_until_closed() {
    let out = term("```\n**not bold**\n```\n**bold**");
    assert!(out.contains("  **not bold**"));
    assert!(out.ends_with("\x1b[1mbold\x1b[0m\n"));
}

#[test]
fn test_text_mode_plain_identity() {
    let plain = "just words, numbers 123 and é\nsecond line";
    assert_eq!(text(plain), format!("{plain}\n"));
}

#[test]
fn test_text_mode_has_no_escapes() {
    let doc = "# T\n> q\n- b\n1. n\n---\n```x\ny\n```\n| a |\n|---|\n";
    let out = text(doc);
    assert!(!out.contains('\x1b'));
    assert_eq!(console::strip_ansi_codes(&term(doc)), out);
}

#[test]
fn test_row_limit_renders_overflow_as_paragraphs() {
    let renderer = MarkdownRenderer::new(OutputMode::Text).limits(Limits::default().max_rows(1));
    let out = renderer.render_str("| A |\n|---|\n| 1 |\n| 2 |\n").unwrap();
    assert!(out.ends_with("└─────┘\n| 2 |\n"), "{out}");
}

#[test]
fn test_overlong_line_is_truncated() {
    let renderer =
        MarkdownRenderer::new(OutputMode::Text).limits(Limits::default().max_line_bytes(5));
    let out = renderer.render_str("abcdefghij\nk").unwrap();
    assert_eq!(out, "abcde\nk\n");
}

#[test]
fn test_crlf_input() {
    assert_eq!(text("# T\r\n- a\r\n"), "\nT\n═══\n  • a\n");
}

#[test]
fn test_invalid_utf8_passes_through() {
    let input: &[u8] = b"a\xffb *c*\n";
    let out = MarkdownRenderer::new(OutputMode::Text)
        .render(input, Vec::new())
        .unwrap();
    assert_eq!(out, b"a\xffb c\n");
}

#[test]
fn test_debug_mode_shows_tokens() {
    let out = render_to_string("**b**", OutputMode::TermDebug).unwrap();
    assert_eq!(out, "[bold]b[/]\n");
}
