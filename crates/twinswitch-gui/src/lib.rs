//! twinswitch demo - a window hosting one toggle switch.
//!
//! The switch is built from a [`SwitchConfig`] (file plus command-line
//! overrides) and shown with a label of the current selection and buttons
//! that drive the programmatic setter.

pub mod app;

pub use app::{Overrides, SwitchApp};
pub use twinswitch_config::SwitchConfig;
