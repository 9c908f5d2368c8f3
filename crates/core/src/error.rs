//! Error types for the dispatch boundary and provider queries.

use crate::CellKind;
use pins_types::GuardError;
use thiserror::Error;

/// Errors crossing the dispatch boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Operation name not in the catalog.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Wrong number of argument cells.
    #[error("{op}: expected {expected} arguments, found {found}")]
    ArityMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// Argument cell of the wrong kind.
    #[error("{op}: argument {position} should be {expected}, found {found}")]
    CellMismatch {
        op: &'static str,
        position: usize,
        expected: CellKind,
        found: CellKind,
    },

    /// Integer argument used as an index is negative.
    #[error("{op}: argument {position} is a negative index ({value})")]
    NegativeIndex {
        op: &'static str,
        position: usize,
        value: i64,
    },

    /// Index outside what the receiver has recorded.
    #[error("{op}: index {index} out of range (length {len})")]
    OutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },

    /// Declared count exceeds what the receiver will allocate.
    #[error("{op}: count {count} exceeds limit {limit}")]
    CountTooLarge {
        op: &'static str,
        count: usize,
        limit: usize,
    },

    /// Receiver refused the call.
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Errors from model provider queries.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A query could not be answered.
    #[error("{what} {index} unavailable: {reason}")]
    Query {
        what: &'static str,
        index: usize,
        reason: String,
    },

    /// A guard row is malformed.
    #[error("Malformed guard: {0}")]
    Guard(#[from] GuardError),
}

impl ProviderError {
    /// Create a query error.
    pub fn query(what: &'static str, index: usize, reason: impl Into<String>) -> Self {
        ProviderError::Query {
            what,
            index,
            reason: reason.into(),
        }
    }
}
