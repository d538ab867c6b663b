//! Cross-module tests.
//!
//! - `determinism.rs`: same config and seed give identical matches
//! - `integration.rs`: end-to-end match scenarios
//! - `properties.rs`: proptest checks of the physical invariants
//! - `helpers.rs`: scenario builders

mod determinism;
mod helpers;
mod properties;

pub use helpers::*;
