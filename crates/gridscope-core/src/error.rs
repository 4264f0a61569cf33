//! Unified error type for the gridscope crates
//!
//! Every projection, dispatch and schema lookup reports failure through
//! [`GridscopeError`]. The variants follow the failure taxonomy of the view
//! layer:
//!
//! - unsupported (element type, info type) combinations, for views and for
//!   schemas, are rejections the caller can act on;
//! - type mismatches and missing structural data mean the caller or the
//!   model broke a contract and are never defaulted;
//! - absent extensions and NaN quantities are not errors at all.
//!
//! # Example
//!
//! ```
//! use gridscope_core::{ElementType, GridscopeError, GridscopeResult, InfoType};
//!
//! fn reject() -> GridscopeResult<()> {
//!     Err(GridscopeError::UnsupportedView {
//!         element_type: ElementType::Bus,
//!         info_type: InfoType::Map,
//!     })
//! }
//!
//! assert!(reject().unwrap_err().is_unsupported());
//! ```

use thiserror::Error;

use crate::kinds::{ElementType, InfoType};

#[derive(Error, Debug)]
pub enum GridscopeError {
    /// No mapper is registered for this combination
    #[error("view {info_type} is not supported for element type {element_type}")]
    UnsupportedView {
        element_type: ElementType,
        info_type: InfoType,
    },

    /// No schema is served for this combination
    #[error("no schema for element type {element_type} with view {info_type}")]
    UnsupportedSchema {
        element_type: ElementType,
        info_type: InfoType,
    },

    /// Equipment handed to a mapper expecting another element type
    #[error("equipment '{id}' is a {found}, expected a {expected}")]
    TypeMismatch {
        id: String,
        expected: ElementType,
        found: ElementType,
    },

    /// Mandatory structural data missing from the model
    #[error("missing model data: {0}")]
    MissingData(String),

    /// Unknown equipment id
    #[error("equipment not found: {0}")]
    NotFound(String),

    /// Schema resource missing, unreadable or unparsable
    #[error("schema error: {0}")]
    Schema(String),

    /// Parsing/deserialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type GridscopeResult<T> = Result<T, GridscopeError>;

impl GridscopeError {
    /// True for rejections of an unsupported (element type, info type) pair.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            GridscopeError::UnsupportedView { .. } | GridscopeError::UnsupportedSchema { .. }
        )
    }
}

impl From<anyhow::Error> for GridscopeError {
    fn from(err: anyhow::Error) -> Self {
        GridscopeError::Other(err.to_string())
    }
}

impl From<String> for GridscopeError {
    fn from(s: String) -> Self {
        GridscopeError::Other(s)
    }
}

impl From<&str> for GridscopeError {
    fn from(s: &str) -> Self {
        GridscopeError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for GridscopeError {
    fn from(err: serde_json::Error) -> Self {
        GridscopeError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_view_names_both_tags() {
        let err = GridscopeError::UnsupportedView {
            element_type: ElementType::Bus,
            info_type: InfoType::Form,
        };
        let message = err.to_string();
        assert!(message.contains("BUS"));
        assert!(message.contains("FORM"));
        assert!(err.is_unsupported());
    }

    #[test]
    fn type_mismatch_is_not_an_unsupported_combination() {
        let err = GridscopeError::TypeMismatch {
            id: "LOAD1".into(),
            expected: ElementType::Generator,
            found: ElementType::Load,
        };
        assert!(!err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "equipment 'LOAD1' is a LOAD, expected a GENERATOR"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "schema file");
        let err: GridscopeError = io_err.into();
        assert!(matches!(err, GridscopeError::Io(_)));
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GridscopeError = json_err.into();
        assert!(matches!(err, GridscopeError::Parse(_)));
    }
}
