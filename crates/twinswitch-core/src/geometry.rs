//! Pixel geometry and the measurement protocol.
//!
//! Sizes and padding are whole pixels, matching what the host hands out during
//! measurement. Draw coordinates are `f32` because zone edges and icon
//! centering land on half pixels.

/// A point in widget-local coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A whole-pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle spanning `[left, right] x [top, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::from_ltrb(0.0, 0.0, size.width as f32, size.height as f32)
    }

    /// Width (may be negative for inverted rectangles).
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height (may be negative for inverted rectangles).
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whole-pixel size, with negative extents clamped to zero.
    pub fn size(&self) -> Size {
        Size::new(
            self.width().max(0.0).round() as u32,
            self.height().max(0.0).round() as u32,
        )
    }

    /// Whether a point lies inside (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Inner padding in pixels.
///
/// `start`/`end` are the leading/trailing horizontal edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    /// Top padding.
    pub top: u32,
    /// Bottom padding.
    pub bottom: u32,
    /// Leading horizontal padding.
    pub start: u32,
    /// Trailing horizontal padding.
    pub end: u32,
}

impl Padding {
    /// Same padding on every edge.
    pub const fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            start: px,
            end: px,
        }
    }
}

/// Display density: physical pixels per density-independent pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(pub f32);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    /// Convert density-independent pixels to whole pixels, rounding half up.
    pub fn dp_to_px(self, dp: f32) -> u32 {
        (dp * self.0 + 0.5).max(0.0) as u32
    }

    /// Convert density-independent pixels to fractional pixels.
    pub fn dp_to_px_f32(self, dp: f32) -> f32 {
        dp * self.0
    }
}

/// One axis of a measurement request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The parent imposes this exact size.
    Exactly(u32),
    /// The widget may be at most this large.
    AtMost(u32),
    /// No constraint.
    Unspecified,
}

impl MeasureSpec {
    /// The size carried by this measure spec (0 when unspecified).
    pub fn size(self) -> u32 {
        match self {
            MeasureSpec::Exactly(px) | MeasureSpec::AtMost(px) => px,
            MeasureSpec::Unspecified => 0,
        }
    }

    /// Resolve the final extent: the offered size when constrained, otherwise `minimum`.
    pub fn resolve(self, minimum: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(px) | MeasureSpec::AtMost(px) => px,
            MeasureSpec::Unspecified => minimum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_conversion_rounds_half_up() {
        assert_eq!(Density(2.0).dp_to_px(8.0), 16);
        assert_eq!(Density(1.5).dp_to_px(1.0), 2);
        assert_eq!(Density(1.0).dp_to_px(-3.0), 0);
    }

    #[test]
    fn measure_spec_resolution() {
        assert_eq!(MeasureSpec::Exactly(300).resolve(10), 300);
        assert_eq!(MeasureSpec::AtMost(120).resolve(10), 120);
        assert_eq!(MeasureSpec::Unspecified.resolve(10), 10);
        assert_eq!(MeasureSpec::Unspecified.size(), 0);
    }

    #[test]
    fn rect_size_clamps_negative_extent() {
        let r = Rect::from_ltrb(10.0, 0.0, 4.0, 5.0);
        assert_eq!(r.size(), Size::new(0, 5));
        assert!(Rect::from_size(Size::new(4, 4)).contains(Point::new(4.0, 0.0)));
    }
}
