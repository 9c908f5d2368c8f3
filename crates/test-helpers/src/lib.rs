//! Test fixtures for PINS model loading.
//!
//! - [`StaticModel`] - an in-memory [`ModelProvider`](pins_core::ModelProvider)
//!   built from tables
//! - [`RecordingDispatcher`] - a [`Dispatcher`](pins_core::Dispatcher) that
//!   records every call and hands out type ids in order
//! - [`fixtures`] - ready-made models

pub mod fixtures;
mod recorder;
mod static_model;

pub use recorder::RecordingDispatcher;
pub use static_model::{LabelMode, StaticModel};
