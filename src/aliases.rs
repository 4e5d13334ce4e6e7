//! Re-exports secure-gate's secret wrapper types
//!
//! The password is the only secret this crate touches.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(RealmPassword, String); // zeroized when the triplet is dropped
