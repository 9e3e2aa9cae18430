//! egui host for twinswitch switches.
//!
//! This crate supplies the host side of the switch protocol on top of egui:
//! a [`Canvas`](twinswitch_core::Canvas) that paints through an
//! [`egui::Painter`], a [`Host`](twinswitch_core::Host) that turns
//! invalidation requests into repaints, input routing, and the
//! [`SwitchView`] widget that ties them together.
//!
//! # Modules
//!
//! - [`canvas`] — Painter-backed canvas and icon texture cache
//! - [`host`] — Repaint/relayout requests on an egui context
//! - [`input`] — egui events to switch pointer events
//! - [`theme`] — Window styling for the demo app
//! - [`widgets`] — [`SwitchView`]

pub mod canvas;
pub mod host;
pub mod input;
pub mod theme;
pub mod widgets;

pub use canvas::{EguiCanvas, IconTextures};
pub use host::EguiHost;
pub use input::PointerRouter;
pub use theme::Theme;
pub use widgets::SwitchView;
