//! Error types for the chart engine
//!
//! Every error here is a recoverable, user-correctable validation failure.
//! The engine performs no I/O, so there is no fatal class and nothing is
//! retried: the same input against the same state always fails the same way.
//!
//! # Error Categories
//!
//! - **RequiredFieldMissing**: empty name, unset `under` or account type, missing bank details
//! - **DuplicateName**: normalized collision with an existing account or ledger
//! - **FormatViolation**: routing code pattern mismatch, negative limits, unknown use-as
//! - **UnresolvedGroup**: an `under` value outside the enumerated ledger groups
//! - **RecordNotFound**: update of an id the store does not hold

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which name space a record belongs to
///
/// Accounts and ledgers are validated against disjoint name sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Account,
    Ledger,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Account => write!(f, "account"),
            RecordKind::Ledger => write!(f, "ledger"),
        }
    }
}

/// Main error type for the chart engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A mandatory field is empty or absent
    #[error("{field} is required")]
    RequiredFieldMissing {
        /// Human-readable field name
        field: String,
    },

    /// The trimmed, case-folded name collides with an existing record
    #[error("a record with this name already exists")]
    DuplicateName {
        /// Name space the collision happened in
        kind: RecordKind,
        /// The name as submitted, trimmed
        name: String,
    },

    /// A supplied value does not have the required shape
    #[error("invalid {field} '{value}': {reason}")]
    FormatViolation {
        field: String,
        value: String,
        reason: String,
    },

    /// `under` is not one of the enumerated ledger groups
    #[error("unknown group '{group}'")]
    UnresolvedGroup { group: String },

    /// No record with this id exists in the store
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: RecordKind, id: u32 },

    /// Two or more validation failures, reported together
    #[error("{0}")]
    Rejected(ValidationErrors),
}

impl ChartError {
    /// Create a RequiredFieldMissing error
    pub fn required(field: &str) -> Self {
        ChartError::RequiredFieldMissing {
            field: field.to_string(),
        }
    }

    /// Create a DuplicateName error
    pub fn duplicate(kind: RecordKind, name: &str) -> Self {
        ChartError::DuplicateName {
            kind,
            name: name.to_string(),
        }
    }

    /// Create a FormatViolation error
    pub fn format_violation(field: &str, value: &str, reason: &str) -> Self {
        ChartError::FormatViolation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an UnresolvedGroup error
    pub fn unresolved_group(group: &str) -> Self {
        ChartError::UnresolvedGroup {
            group: group.to_string(),
        }
    }

    /// Create a RecordNotFound error
    pub fn not_found(kind: RecordKind, id: u32) -> Self {
        ChartError::RecordNotFound { kind, id }
    }

    /// Leaf failures carried by this error
    ///
    /// A `Rejected` aggregate is flattened; any other variant yields itself.
    pub fn kinds(&self) -> Vec<&ChartError> {
        match self {
            ChartError::Rejected(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

/// Ordered collection of validation failures for a single operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<ChartError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failure; nested aggregates are flattened
    pub fn push(&mut self, error: ChartError) {
        match error {
            ChartError::Rejected(inner) => self.0.extend(inner.0),
            leaf => self.0.push(leaf),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartError> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing was recorded
    ///
    /// A single failure is returned as itself, several as `ChartError::Rejected`.
    pub fn into_result<T>(mut self, value: T) -> Result<T, ChartError> {
        match self.0.len() {
            0 => Ok(value),
            1 => Err(self.0.remove(0)),
            _ => Err(ChartError::Rejected(self)),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::required_name(ChartError::required("name"), "name is required")]
    #[case::duplicate(
        ChartError::duplicate(RecordKind::Account, "Cash A/c"),
        "a record with this name already exists"
    )]
    #[case::format(
        ChartError::format_violation("routing code", "AAAA012345", "expected 11 characters"),
        "invalid routing code 'AAAA012345': expected 11 characters"
    )]
    #[case::unresolved(ChartError::unresolved_group("Nowhere"), "unknown group 'Nowhere'")]
    #[case::not_found(ChartError::not_found(RecordKind::Ledger, 7), "ledger 7 not found")]
    fn test_error_display(#[case] error: ChartError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.into_result(5), Ok(5));
    }

    #[test]
    fn test_into_result_single_error_is_unwrapped() {
        let mut errors = ValidationErrors::new();
        errors.push(ChartError::required("bank name"));
        assert_eq!(
            errors.into_result(()),
            Err(ChartError::required("bank name"))
        );
    }

    #[test]
    fn test_into_result_aggregates_and_displays_all() {
        let mut errors = ValidationErrors::new();
        errors.push(ChartError::required("holder name"));
        errors.push(ChartError::required("bank name"));

        let err = errors.into_result(()).unwrap_err();
        assert!(matches!(err, ChartError::Rejected(_)));
        assert_eq!(err.to_string(), "holder name is required; bank name is required");
        assert_eq!(err.kinds().len(), 2);
    }

    #[test]
    fn test_push_flattens_nested_rejections() {
        let mut inner = ValidationErrors::new();
        inner.push(ChartError::required("a"));
        inner.push(ChartError::required("b"));

        let mut outer = ValidationErrors::new();
        outer.push(ChartError::Rejected(inner));
        outer.push(ChartError::required("c"));

        assert_eq!(outer.len(), 3);
    }
}
