// src/core/triplet.rs
use std::fmt;

use crate::aliases::RealmPassword;
use crate::consts::DELIMITER;
use crate::core::digest::RealmDigest;
use crate::enums::CredentialField;

/// Username, realm and password for one digest computation.
///
/// Fields are taken as-is. A field containing the delimiter still hashes,
/// but the joined input then no longer identifies a unique triplet; see
/// [`CredentialTriplet::ambiguous_fields`].
pub struct CredentialTriplet {
    username: String,
    realm: String,
    password: RealmPassword,
}

impl CredentialTriplet {
    pub fn new(
        username: impl Into<String>,
        realm: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            realm: realm.into(),
            password: RealmPassword::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn digest(&self) -> RealmDigest {
        RealmDigest::from_parts(&self.username, &self.realm, self.password.expose_secret())
    }

    /// `username=<hex digest>`, one entry of a properties-file realm
    pub fn properties_line(&self) -> String {
        format!("{}={}", self.username, self.digest())
    }

    /// Fields containing the delimiter, in argument order
    pub fn ambiguous_fields(&self) -> Vec<CredentialField> {
        [
            (CredentialField::Username, self.username.as_str()),
            (CredentialField::Realm, self.realm.as_str()),
            (CredentialField::Password, self.password.expose_secret().as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.contains(DELIMITER))
        .map(|(field, _)| field)
        .collect()
    }
}

impl fmt::Debug for CredentialTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialTriplet")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_password() {
        let triplet = CredentialTriplet::new("alice", "ApplicationRealm", "hunter2");
        let rendered = format!("{triplet:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
