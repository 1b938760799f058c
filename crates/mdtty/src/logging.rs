//! Diagnostic logging to stderr. Stdout carries only rendered output.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 2] = ["mdtty", "mdtty_render"];

/// Installs the global subscriber.
///
/// `RUST_LOG` is honoured for other targets; the mdtty crates log at `warn`,
/// or at `debug` with `--verbose`.
pub fn initialize_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = CRATES
        .iter()
        .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
