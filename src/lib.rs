// src/lib.rs
//! realm-digest — credential digests for application-server properties realms
//!
//! Computes `HEX(MD5(username ':' realm ':' password))`, the entry format
//! WildFly/JBoss properties realms expect, e.g. `mgmt-users.properties`:
//!
//! ```
//! let hex = realm_digest::compute("testUserOne", "ApplicationRealm", "testPasswordOne");
//! assert_eq!(hex, "cf8f98f5b90ccc568e1ffc7767ac9d8b");
//! ```

pub mod aliases;
pub mod cli;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::RealmPassword;
pub use crate::core::{compute, CredentialTriplet, RealmDigest, Result as CoreResult};
pub use enums::CredentialField;
pub use error::CoreError;
