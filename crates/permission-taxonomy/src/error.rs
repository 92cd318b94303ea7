//! Error types for taxonomy conversions
//!
//! The vocabulary itself cannot fail. Errors only appear at the edges where
//! integer wire codes or symbolic names coming from an external caller are
//! decoded back into the closed enumerations.

use thiserror::Error;

/// Taxonomy conversion error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Integer code does not belong to the enumeration
    #[error("Unknown {kind} code: {code}")]
    UnknownCode {
        /// Enumeration being decoded (e.g. "permission group").
        kind: &'static str,
        /// The rejected wire code.
        code: i32,
    },

    /// Symbolic name does not belong to the enumeration
    #[error("Unknown {kind} name: {name}")]
    UnknownName {
        /// Enumeration being decoded.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },
}

/// Result type for taxonomy conversions.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

impl TaxonomyError {
    pub(crate) fn unknown_code(kind: &'static str, code: i32) -> Self {
        TaxonomyError::UnknownCode { kind, code }
    }

    pub(crate) fn unknown_name(kind: &'static str, name: &str) -> Self {
        TaxonomyError::UnknownName {
            kind,
            name: name.to_string(),
        }
    }

    /// Get error code for bridge responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            TaxonomyError::UnknownCode { .. } => "UNKNOWN_CODE",
            TaxonomyError::UnknownName { .. } => "UNKNOWN_NAME",
        }
    }
}
