//! Shared data model for loading PINS models.
//!
//! Everything the registration driver discovers about a model, and everything
//! the host-side registry records, is expressed in terms of the types here:
//!
//! - [`Chunk`] - an interned value of a declared type, with its boundary guard
//! - [`Guard`] / [`GuardList`] - per-transition-group guard label sets
//! - [`Relation`] - the named dependency and reduction relations
//! - [`TypeFormat`] - value-domain format of a declared type
//! - [`NextStatesFn`] / [`LabelEvaluator`] - callable handles into the model

mod chunk;
mod format;
mod guard;
mod relation;
mod successor;

pub use chunk::{Chunk, ChunkError};
pub use format::TypeFormat;
pub use guard::{Guard, GuardError, GuardList};
pub use relation::{IndexSpace, Relation};
pub use successor::{LabelEvaluator, NextStatesFn, StateLabelLongFn, StateLabelsAllFn, Successor};

/// Name of the type whose edge label carries the fired transition's identity.
pub const ACTION_TYPE_NAME: &str = "statement";
