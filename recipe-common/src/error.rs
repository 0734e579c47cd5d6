//! Common error types for recipe search
//!
//! Fetch failures travel as [`crate::loader::FetchError`] and end in the
//! controller's error phase; they never become an [`Error`].

use thiserror::Error;

/// Common result type for recipe search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the recipe search crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
