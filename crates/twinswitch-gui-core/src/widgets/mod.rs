//! egui widgets built on twinswitch-core.
//!
//! - [`SwitchView`] — a [`ToggleSwitch`](twinswitch_core::ToggleSwitch) hosted in an egui layout

mod switch_view;

pub use switch_view::SwitchView;
