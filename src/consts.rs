//! Shared constants — digest format and CLI parameters

/// Separator placed between username, realm and password before hashing
pub const DELIMITER: char = ':';

/// Raw MD5 output size
pub const DIGEST_LEN_BYTES: usize = 16;

/// Length of the rendered lowercase hex digest
pub const DIGEST_LEN_HEX: usize = DIGEST_LEN_BYTES * 2;

/// Number of positional arguments the CLI accepts
pub const EXPECTED_ARGS: usize = 3;

/// One-line help printed on stdout when the argument count is wrong
pub const USAGE: &str = "Usage: realm_digest username realm password";

/// Exit status for a wrong argument count
pub const EXIT_USAGE: u8 = 2;

/// Exit status for any other failure (non-UTF-8 argument, broken stdout)
pub const EXIT_FAILURE: u8 = 1;
