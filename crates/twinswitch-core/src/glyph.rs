//! Icon glyphs and their rasterization to square pixel images.
//!
//! A [`Glyph`] is any resolution-independent icon source. The switch asks for
//! a fresh square raster every time its icon size changes. Rasterizing at
//! size 0 returns an empty image.
//!
//! [`VectorGlyph`] describes an icon as a union of primitive shapes in unit
//! coordinates (`0.0..=1.0` on both axes) and rasterizes it with 4x4
//! supersampled coverage. The two built-in icons live in [`glyphs`].

use crate::color::Rgba;

/// Samples per pixel axis when computing coverage.
const SUPERSAMPLE: u32 = 4;

/// A source that can be rendered to a `size x size` image.
pub trait Glyph {
    /// Render at `size x size` pixels. Size 0 yields [`RasterImage::empty`].
    fn rasterize(&self, size: u32) -> RasterImage;
}

/// A row-major RGBA image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RasterImage {
    /// A zero-sized image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A transparent image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Build from raw pixels. Returns `None` if the pixel count does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Bitmap icons are resampled nearest-neighbor.
impl Glyph for RasterImage {
    fn rasterize(&self, size: u32) -> RasterImage {
        if size == 0 || self.is_empty() {
            return RasterImage::empty();
        }
        let mut out = RasterImage::new(size, size);
        for y in 0..size {
            let sy = (u64::from(y) * u64::from(self.height) / u64::from(size)) as u32;
            for x in 0..size {
                let sx = (u64::from(x) * u64::from(self.width) / u64::from(size)) as u32;
                out.pixels[(y * size + x) as usize] = self.pixels[(sy * self.width + sx) as usize];
            }
        }
        out
    }
}

/// A primitive filled shape in unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle.
    Disc {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        r: f32,
    },
    /// Annulus between `inner` and `outer` radii.
    Ring {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Outer radius.
        outer: f32,
        /// Inner radius.
        inner: f32,
    },
    /// Line segment with round caps.
    Stroke {
        /// Start point `(x, y)`.
        from: (f32, f32),
        /// End point `(x, y)`.
        to: (f32, f32),
        /// Half of the stroke width.
        half_width: f32,
    },
}

impl Shape {
    fn contains(&self, x: f32, y: f32) -> bool {
        match *self {
            Shape::Disc { cx, cy, r } => (x - cx).hypot(y - cy) <= r,
            Shape::Ring {
                cx,
                cy,
                outer,
                inner,
            } => {
                let d = (x - cx).hypot(y - cy);
                d <= outer && d >= inner
            }
            Shape::Stroke {
                from,
                to,
                half_width,
            } => segment_distance((x, y), from, to) <= half_width,
        }
    }
}

fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (qx, qy) = (a.0 + t * abx, a.1 + t * aby);
    (p.0 - qx).hypot(p.1 - qy)
}

/// A glyph made of filled primitive shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorGlyph {
    shapes: Vec<Shape>,
    fill: Rgba,
}

impl VectorGlyph {
    /// Create a glyph from shapes with the given fill color.
    pub fn new(shapes: Vec<Shape>, fill: Rgba) -> Self {
        Self { shapes, fill }
    }

    /// Replace the fill color.
    pub fn with_fill(mut self, fill: Rgba) -> Self {
        self.fill = fill;
        self
    }

    /// Fill color.
    pub fn fill(&self) -> Rgba {
        self.fill
    }

    /// Shapes making up the glyph.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn covered(&self, x: f32, y: f32) -> bool {
        self.shapes.iter().any(|s| s.contains(x, y))
    }
}

impl Glyph for VectorGlyph {
    fn rasterize(&self, size: u32) -> RasterImage {
        if size == 0 {
            return RasterImage::empty();
        }
        let mut image = RasterImage::new(size, size);
        let scale = 1.0 / size as f32;
        let step = 1.0 / SUPERSAMPLE as f32;
        let total = SUPERSAMPLE * SUPERSAMPLE;

        for py in 0..size {
            for px in 0..size {
                let mut hits = 0u32;
                for sy in 0..SUPERSAMPLE {
                    for sx in 0..SUPERSAMPLE {
                        let x = (px as f32 + (sx as f32 + 0.5) * step) * scale;
                        let y = (py as f32 + (sy as f32 + 0.5) * step) * scale;
                        if self.covered(x, y) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let alpha = u32::from(self.fill.a) * hits / total;
                    image.pixels[(py * size + px) as usize] = self.fill.with_alpha(alpha as u8);
                }
            }
        }
        image
    }
}

/// Built-in icons.
pub mod glyphs {
    use super::{Shape, VectorGlyph};
    use crate::color::Rgba;

    /// Default fill for the built-in icons.
    pub const DEFAULT_FILL: Rgba = Rgba::from_rgb(0x37, 0x47, 0x4F);

    const STROKE: f32 = 0.05;

    /// Mars symbol: a ring with an arrow pointing to the upper right.
    pub fn male() -> VectorGlyph {
        VectorGlyph::new(
            vec![
                Shape::Ring {
                    cx: 0.42,
                    cy: 0.58,
                    outer: 0.30,
                    inner: 0.20,
                },
                Shape::Stroke {
                    from: (0.63, 0.37),
                    to: (0.88, 0.12),
                    half_width: STROKE,
                },
                Shape::Stroke {
                    from: (0.88, 0.12),
                    to: (0.62, 0.12),
                    half_width: STROKE,
                },
                Shape::Stroke {
                    from: (0.88, 0.12),
                    to: (0.88, 0.38),
                    half_width: STROKE,
                },
            ],
            DEFAULT_FILL,
        )
    }

    /// Venus symbol: a ring above a cross.
    pub fn female() -> VectorGlyph {
        VectorGlyph::new(
            vec![
                Shape::Ring {
                    cx: 0.50,
                    cy: 0.36,
                    outer: 0.28,
                    inner: 0.18,
                },
                Shape::Stroke {
                    from: (0.50, 0.64),
                    to: (0.50, 0.94),
                    half_width: STROKE,
                },
                Shape::Stroke {
                    from: (0.34, 0.80),
                    to: (0.66, 0.80),
                    half_width: STROKE,
                },
            ],
            DEFAULT_FILL,
        )
    }
}
