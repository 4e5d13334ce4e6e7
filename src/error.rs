// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("expected 3 arguments (username realm password), got {got}")]
    Usage { got: usize },

    #[error("argument {position} is not valid UTF-8")]
    NonUtf8Argument { position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
