// src/core/digest.rs
//! Pure digest primitive — no I/O
//!
//! HEX(MD5(username ':' realm ':' password)), the format a properties-file
//! realm stores next to each username. Input text is hashed as UTF-8.

use std::fmt;

use md5::{Digest, Md5};

use crate::consts::{DELIMITER, DIGEST_LEN_BYTES};

/// 16-byte MD5 digest of a credential triplet
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RealmDigest([u8; DIGEST_LEN_BYTES]);

impl RealmDigest {
    /// Hash the three fields with the delimiter between them.
    ///
    /// The fields are fed to the hasher one by one, so the joined cleartext
    /// (password included) is never assembled into a separate buffer.
    pub fn from_parts(username: &str, realm: &str, password: &str) -> Self {
        let mut buf = [0u8; 4];
        let delimiter: &[u8] = DELIMITER.encode_utf8(&mut buf).as_bytes();

        let mut hasher = Md5::new();
        hasher.update(username.as_bytes());
        hasher.update(delimiter);
        hasher.update(realm.as_bytes());
        hasher.update(delimiter);
        hasher.update(password.as_bytes());

        let mut out = [0u8; DIGEST_LEN_BYTES];
        out.copy_from_slice(&hasher.finalize());
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN_BYTES] {
        &self.0
    }

    /// Lowercase hex, always 32 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for RealmDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RealmDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RealmDigest({})", self.to_hex())
    }
}

/// Compute the realm digest and return it as lowercase hex
pub fn compute(username: &str, realm: &str, password: &str) -> String {
    RealmDigest::from_parts(username, realm, password).to_hex()
}
