//! Drawing surface abstraction.
//!
//! The switch paints through [`Canvas`] in widget-local coordinates. Hosts
//! translate to their own coordinate space. [`RecordingCanvas`] keeps the
//! emitted commands so layout can be checked without rasterizing.

use crate::choice::Choice;
use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::glyph::RasterImage;

/// A 2D surface the switch can paint on.
pub trait Canvas {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw `image` with its top-left corner at `origin`.
    ///
    /// `icon` identifies which of the two glyphs is drawn so hosts can cache
    /// uploaded textures. `opacity` is in `0.0..=1.0`.
    fn draw_image(&mut self, icon: Choice, image: &RasterImage, origin: Point, opacity: f32);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A solid rectangle.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Rgba,
    },
    /// An icon image.
    DrawImage {
        /// Which glyph.
        icon: Choice,
        /// Top-left corner.
        origin: Point,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Opacity in `0.0..=1.0`.
        opacity: f32,
    },
}

/// A canvas that records every call.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded rectangle fills, in order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            DrawCommand::DrawImage { .. } => None,
        })
    }

    /// Recorded image draws as `(icon, origin, opacity)`, in order.
    pub fn images(&self) -> impl Iterator<Item = (Choice, Point, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::DrawImage {
                icon,
                origin,
                opacity,
                ..
            } => Some((icon, origin, opacity)),
            DrawCommand::FillRect { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, icon: Choice, image: &RasterImage, origin: Point, opacity: f32) {
        self.commands.push(DrawCommand::DrawImage {
            icon,
            origin,
            width: image.width(),
            height: image.height(),
            opacity,
        });
    }
}
