//! Host-side registry for PINS models.
//!
//! [`ModelRegistry`] is a [`Dispatcher`](pins_core::Dispatcher): it receives
//! the calls of one registration pass, checks each one against the operation
//! signature and against what it has recorded so far, and keeps its own
//! copy of every fact. [`ModelRegistry::finish`] then yields a [`Model`].

mod config;
mod error;
mod model;
mod registry;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use model::{EdgeLabel, LtsType, Model};
pub use registry::ModelRegistry;
