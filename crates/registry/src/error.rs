//! Error types for the model registry.

use pins_types::Relation;
use thiserror::Error;

/// Errors when finishing a model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A required call never arrived.
    #[error("Model incomplete: {0} was never received")]
    Missing(&'static str),

    /// An indexed name was never set.
    #[error("{what} {index} has no name")]
    Unnamed { what: &'static str, index: usize },

    /// An edge label was never bound to a type.
    #[error("Edge label {0} has no type")]
    Untyped(usize),

    /// A matrix does not match the dimensions of its index spaces.
    #[error("{relation} is {found:?}, expected {expected:?}")]
    MatrixShape {
        relation: Relation,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A guard was received for an action beyond the action count.
    #[error("Guard for action {action}, but only {actions} actions")]
    GuardAction { action: usize, actions: usize },
}
