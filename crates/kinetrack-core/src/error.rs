//! Error types for the kinetrack dataset model.
//!
//! This module provides error handling using [`thiserror`] for automatic
//! `Display` and `Error` trait implementations.
//!
//! # Error Hierarchy
//!
//! - [`CoreError`]: Top-level error type for the crate
//! - [`ValidationError`]: Structural and value errors raised while validating
//!   raw tracking arrays into a dataset
//!
//! Validation is eager: every error is raised at construction time and no
//! partially validated dataset is ever observable. Recoverable anomalies
//! (missing confidence scores, missing names, invalid fps) are not errors at
//! all; they are corrected with a logged warning instead.
//!
//! # Example
//!
//! ```rust
//! use kinetrack_core::error::{CoreError, ValidationError};
//!
//! fn check_rank(ndim: usize) -> Result<(), CoreError> {
//!     if ndim != 4 {
//!         return Err(ValidationError::WrongDimensions {
//!             field: "position",
//!             expected: 4,
//!             actual: ndim,
//!         }
//!         .into());
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// A specialized `Result` type for dataset operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for the kinetrack dataset model.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Dataset validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl CoreError {
    /// Creates a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Errors raised while validating raw tracking arrays and metadata.
///
/// Each variant names the offending field and carries the observed values, so
/// the caller can correct the input and retry.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required builder field was not supplied
    #[error("Missing required field `{field}`")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// An array has the wrong number of dimensions
    #[error("Expected `{field}` to have {expected} dimensions, but got {actual}")]
    WrongDimensions {
        /// Name of the offending array field
        field: &'static str,
        /// Expected number of dimensions
        expected: usize,
        /// Actual number of dimensions
        actual: usize,
    },

    /// An array's trailing (spatial) axis has an unsupported length
    #[error("Expected `{field}` to have {expected} spatial dimensions, but got {actual}")]
    SpatialAxis {
        /// Name of the offending array field
        field: &'static str,
        /// Description of the supported lengths
        expected: &'static str,
        /// Actual trailing axis length
        actual: usize,
    },

    /// Two related arrays disagree on shape
    #[error("Expected `{field}` to have shape {expected:?}, but got {actual:?}")]
    ShapeMismatch {
        /// Name of the offending array field
        field: &'static str,
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        actual: Vec<usize>,
    },

    /// A name list does not match the corresponding array axis length
    #[error("Expected `{field}` to have length {expected}, but got {actual}")]
    NameCount {
        /// Name of the offending name-list field
        field: &'static str,
        /// Expected number of names
        expected: usize,
        /// Actual number of names
        actual: usize,
    },

    /// A name list contains repeated entries
    #[error(
        "`{field}` are not unique: there are {total} elements in the list, \
         but only {unique} are unique"
    )]
    DuplicateNames {
        /// Name of the offending name-list field
        field: &'static str,
        /// Total number of names provided
        total: usize,
        /// Number of distinct names
        unique: usize,
    },

    /// A bounding-box identity does not match the `id_<integer>` pattern
    #[error("Expected IDs in the format 'id_<integer>', but got '{name}'")]
    MalformedId {
        /// The offending identity string
        name: String,
    },
}
