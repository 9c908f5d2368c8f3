//! Error types for registration.

use pins_core::{DispatchError, ProviderError, Reply};
use pins_matrix::MatrixError;
use pins_types::ChunkError;
use thiserror::Error;

/// Errors that abort a registration pass.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A provider query failed.
    #[error("Provider query failed: {0}")]
    Provider(#[from] ProviderError),

    /// The receiving side failed or refused a call.
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// A relation's dimensions cannot be indexed.
    #[error("Relation matrix: {0}")]
    Matrix(#[from] MatrixError),

    /// A chunk failed the boundary guard.
    #[error("Type {type_id} value {value}: {source}")]
    Chunk {
        type_id: usize,
        value: usize,
        #[source]
        source: ChunkError,
    },

    /// `addType` was not answered with the next positional id.
    #[error("addType for type {expected} answered with {reply}")]
    TypeIdMismatch { expected: usize, reply: Reply },

    /// An edge label is bound to a type that was never declared.
    #[error("Edge label {label} bound to undeclared type {type_id}")]
    UnknownType { label: usize, type_id: usize },

    /// The initial state does not match the state length.
    #[error("Initial state has {actual} slots, expected {expected}")]
    StateLength { expected: usize, actual: usize },

    /// A guard references a state label that does not exist.
    #[error("Guard of group {group} references label {label}, but only {labels} labels exist")]
    GuardLabel {
        group: usize,
        label: usize,
        labels: usize,
    },
}
