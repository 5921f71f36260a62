//! Configuration loading and management.
//!
//! This module provides functionality to load and parse the configuration
//! files in the `.step-indicator/` directory.

pub mod error;
pub mod loader;
pub mod models;
