//! Host-independent two-state toggle switch.
//!
//! A [`ToggleSwitch`] shows a binary choice as two side-by-side zones, each
//! with an icon. The selected zone is painted with the checked color and its
//! icon is drawn at full opacity; the other icon is dimmed. A tap anywhere
//! flips the selection.
//!
//! The switch owns no platform resources. Hosts drive it through the
//! measure/layout/draw protocol and provide two capabilities:
//!
//! - [`Canvas`] — where the switch paints (rectangles and images)
//! - [`Host`] — where redraw and relayout requests go
//!
//! # Modules
//!
//! - [`switch`] — the widget, zone geometry, icon sizing
//! - [`gesture`] — tap-versus-drag classification
//! - [`glyph`] — icon sources and rasterization
//! - [`canvas`] / [`host`] — host capabilities and recording test doubles
//! - [`color`], [`geometry`], [`style`] — value types
//!
//! # Example
//!
//! ```rust
//! use twinswitch_core::{
//!     MeasureSpec, PointerEvent, RecordingCanvas, RecordingHost, Rect, SwitchStyle, ToggleSwitch,
//! };
//!
//! let mut switch = ToggleSwitch::new(SwitchStyle::default(), RecordingHost::new());
//! let size = switch.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(100));
//! switch.layout(Rect::from_size(size));
//! assert_eq!(switch.icon_size(), 100);
//!
//! switch.on_pointer_event(&PointerEvent::down(20.0, 20.0));
//! switch.on_pointer_event(&PointerEvent::up(20.0, 20.0));
//! assert!(!switch.is_selected_a());
//!
//! let mut canvas = RecordingCanvas::new();
//! switch.draw(&mut canvas);
//! assert_eq!(canvas.images().count(), 2);
//! ```

pub mod canvas;
pub mod choice;
pub mod color;
pub mod geometry;
pub mod gesture;
pub mod glyph;
pub mod host;
pub mod style;
pub mod switch;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use choice::Choice;
pub use color::{ColorParseError, Rgba};
pub use geometry::{Density, MeasureSpec, Padding, Point, Rect, Size};
pub use gesture::{
    DEFAULT_TOUCH_SLOP_DP, Feed, Gesture, PointerEvent, PointerKind, TapTracker, classify,
    default_touch_slop,
};
pub use glyph::{Glyph, RasterImage, Shape, VectorGlyph, glyphs};
pub use host::{Host, RecordingHost};
pub use style::{DEFAULT_CHECKED, DEFAULT_UNCHECKED, INACTIVE_ALPHA, SwitchStyle};
pub use switch::{IconCache, ToggleSwitch, Zones, compute_icon_size};
