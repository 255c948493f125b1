//! Core error types for sortviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants.

use thiserror::Error;

/// Core errors produced by the sortviz-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The requested algorithm identifier is not registered.
    #[error("unknown algorithm: '{name}'")]
    UnknownAlgorithm { name: String },
}
