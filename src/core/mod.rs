// src/core/mod.rs
pub mod digest;
pub mod triplet;

pub use digest::*;
pub use triplet::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
