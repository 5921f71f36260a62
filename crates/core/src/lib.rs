//! # si-core
//!
//! Step state resolution and host binding for the step indicator.
//!
//! This crate provides:
//! - The pure state resolver that classifies steps from a current index
//! - The `StepHost` trait that presentation layers implement
//! - The `StepIndicator` controller that keeps a host in sync
//! - Configuration loading from the `.step-indicator/` directory
//!
//! ## Modules
//!
//! - [`resolver`]: Classification of steps into pending, active and completed
//! - [`host`]: Presentation sink trait and an in-memory host
//! - [`indicator`]: Lifecycle-driven controller
//! - [`instrumentation`]: Performance marks and measures over `tracing`
//! - [`config`]: Configuration loading and management

pub mod config;
pub mod host;
pub mod indicator;
pub mod instrumentation;
pub mod resolver;

pub use host::StepHost;
pub use host::Subscription;
pub use indicator::StepIndicator;
pub use indicator::SyncOutcome;
pub use resolver::Resolution;
