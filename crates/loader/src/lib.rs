//! Registration driver for PINS models.
//!
//! One call to [`register_model`] walks a [`ModelProvider`](pins_core::ModelProvider)
//! in a fixed order and dispatches every fact it finds:
//!
//! 1. State slots: `setStateLength`, `setStateSlotName` per slot
//! 2. Types: `addType` (id checked against call order), `setTypeFormat`, `addChunk` per value
//! 3. Edge labels: `setEdgeLabelCount`, name and type per label, then `setActionLabel`
//! 4. `setInitialState`
//! 5. `setNextStatesFn`
//! 6. State labels: `setStateLabelCount`, names, then `setStateLabelsFn` if offered
//! 7. Transition groups: `setActionCount`, `setGuardsAll`
//! 8. One `setMatrix` per present relation
//!
//! The pass is synchronous and one-shot: the first failure aborts it.

mod config;
mod driver;
mod error;

pub use config::{ActionLabelPolicy, LoaderConfig};
pub use driver::{register_model, RegistrationSummary};
pub use error::RegistrationError;
