//! [`Canvas`] implementation on an egui painter.
//!
//! The switch draws in physical pixels relative to its own top-left corner.
//! [`EguiCanvas`] maps that to egui's logical points at the widget's screen
//! position. Raster icons are uploaded as textures once per icon size.

use egui::{Color32, Painter, Pos2, TextureHandle, TextureId, TextureOptions, pos2, vec2};
use twinswitch_core::{Canvas, Choice, Point, RasterImage, Rect, Rgba};

/// Convert a switch color to an egui color.
pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Convert a raster icon to an egui image.
pub fn to_color_image(image: &RasterImage) -> egui::ColorImage {
    let bytes: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        &bytes,
    )
}

/// GPU textures for the two icons, keyed by icon size.
#[derive(Default)]
pub struct IconTextures {
    a: Option<(u32, TextureHandle)>,
    b: Option<(u32, TextureHandle)>,
}

impl IconTextures {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture id for `icon`, uploading `image` if the cached one has another size.
    pub fn texture_id(
        &mut self,
        ctx: &egui::Context,
        icon: Choice,
        image: &RasterImage,
    ) -> TextureId {
        let slot = match icon {
            Choice::A => &mut self.a,
            Choice::B => &mut self.b,
        };
        let size = image.width();
        if let Some((cached, handle)) = slot.as_ref()
            && *cached == size
        {
            return handle.id();
        }

        tracing::trace!(%icon, size, "uploading icon texture");
        let handle = ctx.load_texture(
            format!("twinswitch-icon-{icon}"),
            to_color_image(image),
            TextureOptions::LINEAR,
        );
        let id = handle.id();
        *slot = Some((size, handle));
        id
    }

    /// Icon size of the cached texture for `icon`, if any.
    pub fn cached_size(&self, icon: Choice) -> Option<u32> {
        match icon {
            Choice::A => self.a.as_ref().map(|(s, _)| *s),
            Choice::B => self.b.as_ref().map(|(s, _)| *s),
        }
    }
}

/// Paints switch output onto an egui painter.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    textures: &'a mut IconTextures,
    origin: Pos2,
    points_per_pixel: f32,
}

impl<'a> EguiCanvas<'a> {
    /// Create a canvas whose local `(0, 0)` is `origin` in screen points.
    ///
    /// `pixels_per_point` converts the switch's pixel coordinates to points.
    pub fn new(
        painter: &'a Painter,
        textures: &'a mut IconTextures,
        origin: Pos2,
        pixels_per_point: f32,
    ) -> Self {
        Self {
            painter,
            textures,
            origin,
            points_per_pixel: 1.0 / pixels_per_point.max(f32::EPSILON),
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        self.origin + vec2(x, y) * self.points_per_pixel
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        // Inverted rects happen when the widget is narrower than one icon.
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let screen = egui::Rect::from_min_max(
            self.to_screen(rect.left, rect.top),
            self.to_screen(rect.right, rect.bottom),
        );
        self.painter.rect_filled(screen, 0.0, to_color32(color));
    }

    fn draw_image(&mut self, icon: Choice, image: &RasterImage, origin: Point, opacity: f32) {
        let texture = self.textures.texture_id(self.painter.ctx(), icon, image);
        let screen = egui::Rect::from_min_max(
            self.to_screen(origin.x, origin.y),
            self.to_screen(
                origin.x + image.width() as f32,
                origin.y + image.height() as f32,
            ),
        );
        let uv = egui::Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        self.painter
            .image(texture, screen, uv, Color32::WHITE.gamma_multiply(opacity));
    }
}
