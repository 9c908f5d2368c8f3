//! Core types for loading PINS models across a dispatch boundary.
//!
//! Every fact a registration pass discovers crosses the boundary as a
//! [`Call`]: an [`Operation`] from a fixed catalog plus an ordered list of
//! [`ArgCell`]s. The receiving side implements [`Dispatcher`]; the model
//! being loaded implements [`ModelProvider`].
//!
//! ```text
//! ModelProvider ──queries──▶ registration driver ──Call──▶ Dispatcher
//!                                                   ◀─Reply─
//! ```
//!
//! Each operation has a fixed signature of cell kinds
//! ([`Operation::signature`]). Cells are tagged, so a receiver can check the
//! shape of a call ([`Call::validate`]) before interpreting it by position.

mod call;
mod cell;
mod error;
mod operation;
mod provider;
mod traits;

pub use call::Call;
pub use cell::{ArgCell, CellKind, FnHandle};
pub use error::{DispatchError, ProviderError};
pub use operation::Operation;
pub use provider::ModelProvider;
pub use traits::{Dispatcher, FnDispatcher, Reply};
