//! # si-protocol
//!
//! Shared data models for the step indicator.
//!
//! This crate defines the values passed between the state resolver, the
//! controller that binds it to a host, and the hosts that render steps:
//! - Step index input and per-step classification
//! - Per-item markings (classification plus accessibility metadata)
//! - Configuration and presentational theme
//! - Operations hosts apply to the indicator
//!
//! ## Modules
//!
//! - [`step_models`]: `StepIndex`, `RawStepIndex` and `StepState`
//! - [`marking_models`]: `StepMarking` and completed-label policy
//! - [`config_models`]: `IndicatorConfig` and `Theme`
//! - [`ipc`]: `Op` values produced by hosts
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, thiserror and ts-rs
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other step indicator crates

pub mod config_models;
pub mod ipc;
pub mod marking_models;
pub mod step_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use marking_models::*;
pub use step_models::*;
