// src/cli.rs
//! Argument handling for the `realm_digest` binary
//!
//! Kept in the library so the whole flow can be driven with in-memory
//! writers from tests.

use std::ffi::OsString;
use std::io::Write;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::consts::{DELIMITER, EXPECTED_ARGS};
use crate::core::{CredentialTriplet, Result};
use crate::error::CoreError;

/// Build a triplet from the positional arguments (program name already stripped).
///
/// Exactly three arguments are accepted, each of which must be valid UTF-8.
pub fn parse_args<I>(args: I) -> Result<CredentialTriplet>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() != EXPECTED_ARGS {
        return Err(CoreError::Usage { got: args.len() });
    }

    let fields = args
        .into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            arg.into_string()
                .map_err(|_| CoreError::NonUtf8Argument { position: idx + 1 })
        })
        .collect::<Result<Vec<String>>>()?;

    let [username, realm, password]: [String; EXPECTED_ARGS] = fields
        .try_into()
        .map_err(|rest: Vec<String>| CoreError::Usage { got: rest.len() })?;

    Ok(CredentialTriplet::new(username, realm, password))
}

/// Parse, hash and print the digest line to `stdout`.
///
/// A delimiter inside any field is reported on `stderr`; the digest of the
/// literal join is still printed.
pub fn run<I, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    O: Write,
    E: Write,
{
    let triplet = parse_args(args)?;

    let ambiguous = triplet.ambiguous_fields();
    if !ambiguous.is_empty() {
        #[cfg(feature = "logging")]
        warn!(fields = ?ambiguous, "delimiter found inside credential fields");

        let names: Vec<String> = ambiguous.iter().map(ToString::to_string).collect();
        writeln!(
            stderr,
            "warning: {} contains '{DELIMITER}'; the digest input is ambiguous",
            names.join(", ")
        )?;
    }

    let digest = triplet.digest();

    #[cfg(feature = "logging")]
    debug!(realm = triplet.realm(), "computed realm digest");

    writeln!(stdout, "{digest}")?;
    stdout.flush()?;
    Ok(())
}
