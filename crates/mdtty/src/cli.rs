//! Command-line surface: argument definitions and the render loop.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use mdtty_render::{Limits, MarkdownRenderer, OutputMode};
use tracing::debug;

use crate::error::CliError;

const STDIN_PATH: &str = "-";

/// Builds the `mdtty` command.
pub fn command() -> Command {
    Command::new("mdtty")
        .about("Render Markdown as styled terminal text")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Markdown files to render, in order; '-' or none reads stdin"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("MODE")
                .value_parser(["auto", "term", "text", "term-debug"])
                .default_value("auto")
                .help("Output mode: auto, term, text, or term-debug"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug diagnostics to stderr"),
        )
}

/// Parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub files: Vec<PathBuf>,
    pub mode: OutputMode,
    pub verbose: bool,
    pub limits: Limits,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let files = matches
            .get_many::<PathBuf>("files")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default();

        Self {
            files,
            mode: extract_output_mode(matches),
            verbose: matches.get_flag("verbose"),
            limits: Limits::default(),
        }
    }
}

/// Reads the `--output` value. Unknown values fall back to Auto.
fn extract_output_mode(matches: &ArgMatches) -> OutputMode {
    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("term") => OutputMode::Term,
        Some("text") => OutputMode::Text,
        Some("term-debug") => OutputMode::TermDebug,
        _ => OutputMode::Auto,
    }
}

/// Renders every input named in `options` into `out`.
///
/// The output mode is resolved once, before the first file. Rendering stops
/// at the first file that cannot be opened or read; everything before it
/// has already been written.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<(), CliError> {
    let mode = options.mode.resolve();
    debug!(?mode, files = options.files.len(), "starting");

    let renderer = MarkdownRenderer::new(mode).limits(options.limits);
    if options.files.is_empty() {
        render_path(&renderer, Path::new(STDIN_PATH), out)?;
    }
    for path in &options.files {
        render_path(&renderer, path, out)?;
    }
    out.flush().map_err(CliError::Flush)
}

fn render_path<W: Write>(
    renderer: &MarkdownRenderer,
    path: &Path,
    out: &mut W,
) -> Result<(), CliError> {
    let rendered = if path == Path::new(STDIN_PATH) {
        debug!("rendering stdin");
        renderer.render(io::stdin().lock(), &mut *out)
    } else {
        debug!(path = %path.display(), "rendering file");
        let file = File::open(path).map_err(|source| CliError::Open {
            path: path.display().to_string(),
            source,
        })?;
        renderer.render(BufReader::new(file), &mut *out)
    };

    rendered.map(|_| ()).map_err(|source| CliError::Render {
        name: display_name(path),
        source,
    })
}

fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
