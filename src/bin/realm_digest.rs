// src/bin/realm_digest.rs
//! realm_digest — print HEX(MD5(username:realm:password)) for a properties realm

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use realm_digest::cli::run;
use realm_digest::consts::{EXIT_FAILURE, EXIT_USAGE, USAGE};
use realm_digest::CoreError;

#[cfg(feature = "logging")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // stdout is reserved for the digest line
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<ExitCode> {
    #[cfg(feature = "logging")]
    init_tracing();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match run(env::args_os().skip(1), &mut stdout, &mut stderr) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CoreError::Usage { .. }) => {
            writeln!(stdout, "{USAGE}").context("Failed to write usage to stdout")?;
            Ok(ExitCode::from(EXIT_USAGE))
        }
        Err(err @ CoreError::NonUtf8Argument { .. }) => {
            writeln!(stderr, "error: {err}").context("Failed to write to stderr")?;
            Ok(ExitCode::from(EXIT_FAILURE))
        }
        Err(CoreError::Io(err)) => Err(err).context("Failed to write digest to stdout"),
    }
}
