use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use mdtty::{command, initialize_logging, run, Options};

fn main() -> ExitCode {
    let options = Options::from_matches(&command().get_matches());
    initialize_logging(options.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&options, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            // Output from earlier files goes out before the error message.
            let _ = out.flush();
            eprintln!("mdtty: {err}");
            ExitCode::FAILURE
        }
    }
}
