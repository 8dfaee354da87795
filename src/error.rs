//! Errors reported by opt-in validation.
//!
//! Rendering itself never fails. These only come out of
//! [`crate::Builder::validate`] and [`crate::Builder::try_select`].

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The table name is empty or blank.
    #[error("table name is empty or blank")]
    EmptyTable,

    /// A column name in the given clause is empty or blank.
    #[error("empty column name in {0}")]
    EmptyColumn(&'static str),

    /// Operator text that is unsafe to inline.
    #[error("invalid operator {operator:?} on column {column}: {reason}")]
    InvalidOperator {
        column: String,
        operator: String,
        reason: &'static str,
    },

    /// A group closure added no conditions and would render `()`.
    #[error("group has no conditions")]
    EmptyGroup,

    /// An `or()` marker with no condition on one of its sides.
    #[error("or() at position {index} does not sit between two conditions")]
    DanglingOr { index: usize },

    /// A negative LIMIT or OFFSET.
    #[error("{clause} must not be negative, got {value}")]
    Negative { clause: &'static str, value: i64 },
}
