//! # Transform Errors
//!
//! Every fallible operation in this crate returns `eyre::Result`. Failures a
//! caller may want to branch on are raised as a [`TransformError`] inside the
//! report and can be recovered with `report.downcast_ref::<TransformError>()`.
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `OutOfRange` | Segment, Cut-Out, Cut-In, schema slicing, field access |
//! | `MapTooLong` | Map setters given more entries than output fields |
//! | `InsufficientSources` | `apply` with fewer sources than the map needs |
//! | `SingleSourceRequired` | Single-source helpers on a multi-source map |
//! | `ReadOnly` | Any write to a read-only record |
//! | `UnmappedField` | A write through a view to a `NO_FIELD` entry |
//! | `TypeMismatch` | A value whose type the field cannot hold |
//!
//! A field in the not-available state is never an error.

use crate::types::DataType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("{what} {value} out of range for arity {arity}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        arity: usize,
    },

    #[error("map has {len} entries but output schema has only {arity} fields")]
    MapTooLong { len: usize, arity: usize },

    #[error("transform requires at least {expected} source record(s), got {actual}")]
    InsufficientSources { expected: usize, actual: usize },

    #[error("operation requires a single-source transform, map uses {source_count} sources")]
    SingleSourceRequired { source_count: usize },

    #[error("record is read-only, cannot write field {field}")]
    ReadOnly { field: usize },

    #[error("field {field} has no backing source field")]
    UnmappedField { field: usize },

    #[error("field {field} of type {expected:?} cannot hold a {actual:?} value")]
    TypeMismatch {
        field: usize,
        expected: DataType,
        actual: DataType,
    },
}

impl TransformError {
    pub(crate) fn out_of_range(what: &'static str, value: usize, arity: usize) -> Self {
        TransformError::OutOfRange { what, value, arity }
    }
}

/// Returns the [`TransformError`] carried by `report`, if any.
pub fn transform_error(report: &eyre::Report) -> Option<&TransformError> {
    report.downcast_ref::<TransformError>()
}
