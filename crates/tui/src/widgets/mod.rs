//! TUI widgets module.
//!
//! This module contains the widgets the terminal host draws.

pub mod command_composer;
pub mod step_detail;
pub mod step_indicator;

pub use command_composer::CommandComposer;
pub use step_detail::StepDetail;
pub use step_indicator::StepIndicatorWidget;
