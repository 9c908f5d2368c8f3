//! Dependency matrix engine.
//!
//! Model providers describe each relation as a row accessor: a function from
//! row index to either a row of integers or "absent". This crate converts such
//! a relation into a [`DependencyMatrix`], a dense byte-per-entry matrix that
//! owns its storage and can be handed across the dispatch boundary as-is.
//!
//! # Absence
//!
//! Two levels of absence are distinguished:
//!
//! - An absent **row** is skipped and stays all-zero in the result.
//! - An absent **row 0** means the provider has no information for the whole
//!   relation; no matrix is produced and the sink is never invoked.
//!
//! Only row 0 decides whole-relation absence. A relation with no rows or no
//! columns is absent by construction. A relation whose size overflows
//! `usize` is an error, reported before any row is queried.

mod convert;
mod error;
mod matrix;

pub use convert::convert;
pub use error::MatrixError;
pub use matrix::DependencyMatrix;
