use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Output, Stdio};

fn mdtty(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mdtty"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_reads_stdin_without_arguments() {
    let output = mdtty(&["--output", "text"], "## Hi\n> *quote*\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\nHi\n│ quote\n");
}

#[test]
fn test_dash_reads_stdin_between_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.md");
    fs::write(&path, "from file\n").unwrap();
    let path = path.to_str().unwrap();

    let output = mdtty(&["--output", "text", path, "-"], "from stdin\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "from file\nfrom stdin\n");
}

#[test]
fn test_auto_mode_is_plain_when_piped() {
    let output = mdtty(&[], "**bold**\n");
    assert_eq!(stdout(&output), "bold\n");
}

#[test]
fn test_term_mode_forces_styling() {
    let output = mdtty(&["--output", "term"], "**bold**\n");
    assert_eq!(stdout(&output), "\x1b[1mbold\x1b[0m\n");
}

#[test]
fn test_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.md");
    fs::write(&first, "- rendered\n").unwrap();
    let missing = dir.path().join("nope.md");

    let output = mdtty(
        &[
            "--output",
            "text",
            first.to_str().unwrap(),
            missing.to_str().unwrap(),
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "  • rendered\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with(&format!("mdtty: cannot open '{}': ", missing.display())),
        "{stderr}"
    );
}

#[test]
fn test_table_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.md");
    fs::write(&path, "| A | B |\n| --- | :---: |\n| x | y |\n").unwrap();

    let output = mdtty(&["--output", "text", path.to_str().unwrap()], "");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "┌─────┬─────┐\n\
         │ A   │  B  │\n\
         ├─────┼─────┤\n\
         │ x   │  y  │\n\
         └─────┴─────┘\n"
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = mdtty(&["--output", "text", "-v"], "| a |\n|---|\n");
    assert!(output.status.success());
    assert!(!stdout(&output).contains("rendering"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("rendering table"), "{stderr}");
}

#[test]
fn test_rejects_unknown_output_mode() {
    let output = mdtty(&["--output", "json"], "");
    assert!(!output.status.success());
}

#[test]
fn test_closed_stdout_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.md");
    fs::write(&path, "- **line** with `code`\n".repeat(200_000)).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_mdtty"))
        .args(["--output", "text", path.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut first = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first)
        .unwrap();
    assert_eq!(first, "  • line with  code \n");

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{:?}", output.status);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_read_failure_names_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap();

    let output = mdtty(&["--output", "text", path], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with(&format!("mdtty: {path}: read failed: ")),
        "{stderr}"
    );
}
