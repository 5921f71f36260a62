//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - A recording host that mimics a DOM-like step list
//! - Fixtures for step labels and configuration directories
//! - Assertions over applied markings

pub mod assertions;
pub mod fixtures;
pub mod recording_host;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
pub use recording_host::*;
