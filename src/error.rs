//! # Error Types
//!
//! This module defines the error types for the string search engine. All
//! failures are configuration failures: once a configuration passes
//! validation, a search always terminates within its generation budget and
//! cannot fail at runtime.
//!
//! ## Examples
//!
//! ```rust
//! use genseek::error::{Result, SearchError};
//!
//! fn check(population_size: usize) -> Result<()> {
//!     if population_size < 10 {
//!         return Err(SearchError::Configuration(
//!             "population size must be at least 10".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(5).is_err());
//! assert!(check(100).is_ok());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Error that occurs when an invalid configuration is provided.
    ///
    /// The message names the parameter that failed validation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SearchError`.
pub type Result<T> = std::result::Result<T, SearchError>;
