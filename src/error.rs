//! Error types for employee dispatch.
//!
//! Construction, rendering and dispatch are total and never fail. The
//! errors here cover configuration loading and parsing kinds from text.

use thiserror::Error;

/// The main error type for the crate.
///
/// # Example
///
/// ```
/// use employee_dispatch::error::DispatchError;
///
/// let error = DispatchError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Text did not name any member of the kind set.
    #[error("Unknown employee kind: {name}")]
    UnknownKind {
        /// The text that failed to parse.
        name: String,
    },

    /// No employee with the given id exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i64,
    },
}

/// A type alias for Results that return DispatchError.
pub type DispatchResult<T> = Result<T, DispatchError>;
