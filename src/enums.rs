// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

/// One of the three fields joined into the digest input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Realm,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CredentialField::Username => "username",
            CredentialField::Realm => "realm",
            CredentialField::Password => "password",
        })
    }
}
