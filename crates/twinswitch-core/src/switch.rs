//! The two-zone toggle switch.
//!
//! The switch is split into two side-by-side zones, one per [`Choice`]. The
//! selected zone is painted with the checked color and is wide; the other
//! zone is just wide enough for one icon plus horizontal padding. Each zone
//! shows its glyph centered, full opacity when selected and dimmed otherwise.
//!
//! ```text
//!  selected = A                         selected = B
//! ┌──────────────────────┬─────┐      ┌─────┬──────────────────────┐
//! │        [A]           │ (b) │      │ (a) │         [B]          │
//! └──────────────────────┴─────┘      └─────┴──────────────────────┘
//!   checked color          bg           bg        checked color
//! ```
//!
//! The switch is driven entirely by its host: `measure` → `layout` → `draw`,
//! with pointer events forwarded to `on_pointer_event`. State changes are
//! reported back through the [`Host`] capability.

use core::fmt;

use crate::canvas::Canvas;
use crate::choice::Choice;
use crate::geometry::{MeasureSpec, Padding, Point, Rect, Size};
use crate::gesture::{Feed, Gesture, PointerEvent, TapTracker};
use crate::glyph::{Glyph, RasterImage, glyphs};
use crate::host::Host;
use crate::style::SwitchStyle;

/// Horizontal room reserved per icon: two icons plus spacing fit in half the track.
const WIDTH_DIVISOR: f64 = 2.5;

/// Icon edge length for a widget of `size` with `padding`.
///
/// Horizontal padding is counted twice because the narrow zone repeats it
/// around the inactive icon. The result never exceeds
/// `min(height, width / 2.5)` and is 0 when padding swallows the space.
pub fn compute_icon_size(size: Size, padding: Padding) -> u32 {
    let height_avail =
        i64::from(size.height) - i64::from(padding.top) - i64::from(padding.bottom);
    let width_avail = (i64::from(size.width)
        - 2 * i64::from(padding.start)
        - 2 * i64::from(padding.end)) as f64
        / WIDTH_DIVISOR;
    (height_avail as f64).min(width_avail).floor().max(0.0) as u32
}

/// Both glyphs rasterized at the same size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconCache {
    icon_a: Option<RasterImage>,
    icon_b: Option<RasterImage>,
    icon_size: u32,
}

impl IconCache {
    fn rasterize(glyph_a: &dyn Glyph, glyph_b: &dyn Glyph, icon_size: u32) -> Self {
        let non_empty = |img: RasterImage| (!img.is_empty()).then_some(img);
        Self {
            icon_a: non_empty(glyph_a.rasterize(icon_size)),
            icon_b: non_empty(glyph_b.rasterize(icon_size)),
            icon_size,
        }
    }

    /// Edge length both icons were rasterized at.
    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// The raster for one glyph, if one exists at the current size.
    pub fn get(&self, icon: Choice) -> Option<&RasterImage> {
        match icon {
            Choice::A => self.icon_a.as_ref(),
            Choice::B => self.icon_b.as_ref(),
        }
    }

    /// Whether both glyphs are rasterized.
    pub fn is_ready(&self) -> bool {
        self.icon_a.is_some() && self.icon_b.is_some()
    }
}

/// Zone rectangles for the current size and selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zones {
    /// Zone holding glyph A.
    pub left: Rect,
    /// Zone holding glyph B.
    pub right: Rect,
    /// Whichever of the two is painted with the checked color.
    pub checked: Rect,
}

impl Zones {
    /// Zones for a widget of `size`, icon edge `icon_size`, and `padding`.
    pub fn compute(size: Size, icon_size: u32, padding: Padding, selected: Choice) -> Self {
        let width = size.width as f32;
        let height = size.height as f32;
        let checked_width = width - (icon_size as f32 + padding.start as f32 + padding.end as f32);
        let unchecked_width = width - checked_width;

        let split = match selected {
            Choice::A => checked_width,
            Choice::B => unchecked_width,
        };
        let left = Rect::from_ltrb(0.0, 0.0, split, height);
        let right = Rect::from_ltrb(split, 0.0, width, height);
        let checked = match selected {
            Choice::A => left,
            Choice::B => right,
        };
        Self {
            left,
            right,
            checked,
        }
    }

    /// The zone belonging to `icon`.
    pub fn zone(&self, icon: Choice) -> Rect {
        match icon {
            Choice::A => self.left,
            Choice::B => self.right,
        }
    }
}

/// A binary toggle drawn as two colored zones with one glyph each.
///
/// `H` receives redraw/relayout requests; `()` discards them.
pub struct ToggleSwitch<H = ()> {
    selected: Choice,
    style: SwitchStyle,
    glyph_a: Box<dyn Glyph>,
    glyph_b: Box<dyn Glyph>,
    icons: IconCache,
    measured: Option<Size>,
    bounds: Rect,
    tracker: TapTracker,
    host: H,
}

impl<H> fmt::Debug for ToggleSwitch<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("selected", &self.selected)
            .field("style", &self.style)
            .field("icon_size", &self.icons.icon_size)
            .field("measured", &self.measured)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Default for ToggleSwitch<()> {
    fn default() -> Self {
        Self::new(SwitchStyle::default(), ())
    }
}

impl<H: Host> ToggleSwitch<H> {
    /// Create a switch with the built-in glyphs, selecting [`Choice::A`].
    pub fn new(style: SwitchStyle, host: H) -> Self {
        let tracker = TapTracker::new(style.touch_slop);
        Self {
            selected: Choice::A,
            style,
            glyph_a: Box::new(glyphs::male()),
            glyph_b: Box::new(glyphs::female()),
            icons: IconCache::default(),
            measured: None,
            bounds: Rect::default(),
            tracker,
            host,
        }
    }

    /// Set the initial selection without notifying the host.
    pub fn with_selected(mut self, selected: Choice) -> Self {
        self.selected = selected;
        self
    }

    /// Replace both glyphs. Takes effect at the next measure.
    pub fn with_glyphs(mut self, a: impl Glyph + 'static, b: impl Glyph + 'static) -> Self {
        self.glyph_a = Box::new(a);
        self.glyph_b = Box::new(b);
        self.icons = IconCache::default();
        self.measured = None;
        self
    }

    /// Whether [`Choice::A`] is selected.
    pub fn is_selected_a(&self) -> bool {
        self.selected.is_a()
    }

    /// Current selection.
    pub fn selected(&self) -> Choice {
        self.selected
    }

    /// Select A (`true`) or B (`false`).
    pub fn set_selected_a(&mut self, is_a: bool) {
        self.set_selected(Choice::from_is_a(is_a));
    }

    /// Set the selection and request both a redraw and a relayout.
    ///
    /// Requests are issued even when the value does not change.
    pub fn set_selected(&mut self, selected: Choice) {
        self.selected = selected;
        self.host.request_redraw();
        self.host.request_relayout();
    }

    /// Flip the selection and request a redraw, as a tap does.
    pub fn toggle(&mut self) {
        self.selected = self.selected.opposite();
        tracing::debug!(selected = %self.selected, "switch toggled");
        self.host.request_redraw();
    }

    /// Style the switch was built with.
    pub fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// Current icon edge length (0 before the first measure).
    pub fn icon_size(&self) -> u32 {
        self.icons.icon_size()
    }

    /// Rasterized icons.
    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    /// Size from the last layout.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Bounds from the last layout, in the host's coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The host receiving invalidation requests.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Measurement pass: resolve the size and rasterize both icons for it.
    ///
    /// Constrained axes take the offered size; unconstrained axes fall back to
    /// the style's `min_size`.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = Size::new(
            width.resolve(self.style.min_size.width),
            height.resolve(self.style.min_size.height),
        );
        self.refresh_icons(size);
        tracing::trace!(
            width = size.width,
            height = size.height,
            icon_size = self.icons.icon_size,
            "measure"
        );
        size
    }

    /// Layout pass: record the final bounds.
    ///
    /// Icons are re-rasterized if the bounds differ from the measured size.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let size = bounds.size();
        if self.measured != Some(size) {
            self.refresh_icons(size);
        }
        tracing::trace!(width = size.width, height = size.height, "layout");
    }

    fn refresh_icons(&mut self, size: Size) {
        let icon_size = compute_icon_size(size, self.style.padding);
        self.icons = IconCache::rasterize(self.glyph_a.as_ref(), self.glyph_b.as_ref(), icon_size);
        self.measured = Some(size);
    }

    /// Zone rectangles for the current layout and selection.
    pub fn zones(&self) -> Zones {
        Zones::compute(
            self.size(),
            self.icons.icon_size(),
            self.style.padding,
            self.selected,
        )
    }

    /// Draw pass, in widget-local coordinates.
    ///
    /// Missing icons (nothing measured yet, or a zero icon size) are skipped;
    /// the zones are always painted.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let size = self.size();
        tracing::trace!(selected = %self.selected, "draw");

        canvas.fill_rect(Rect::from_size(size), self.style.unchecked);

        let zones = self.zones();
        canvas.fill_rect(zones.checked, self.style.checked);

        let top = (size.height as f32 - self.icons.icon_size() as f32) / 2.0;
        for icon in [Choice::A, Choice::B] {
            let Some(image) = self.icons.get(icon) else {
                continue;
            };
            let zone = zones.zone(icon);
            let x = zone.left + (zone.width() - image.width() as f32) / 2.0;
            let opacity = if icon == self.selected {
                1.0
            } else {
                self.style.inactive_opacity()
            };
            canvas.draw_image(icon, image, Point::new(x, top), opacity);
        }
    }

    /// Handle one pointer event. Returns whether it was consumed.
    ///
    /// Presses are consumed so the host keeps delivering the sequence. A
    /// release that completes a tap flips the selection and requests a
    /// redraw. Drags, cancels, and moves are not consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match self.tracker.feed(event) {
            Feed::Pressed => {
                tracing::debug!(x = event.position.x, y = event.position.y, "pointer down");
                true
            }
            Feed::Complete(Gesture::Tap) => {
                self.toggle();
                true
            }
            Feed::Complete(Gesture::Drag | Gesture::Cancelled) | Feed::Pending => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::host::RecordingHost;

    fn measured(width: u32, height: u32) -> ToggleSwitch<RecordingHost> {
        let mut switch = ToggleSwitch::new(SwitchStyle::default(), RecordingHost::new());
        switch.measure(MeasureSpec::Exactly(width), MeasureSpec::Exactly(height));
        switch.layout(Rect::from_size(Size::new(width, height)));
        switch
    }

    #[test]
    fn icon_size_uses_smaller_axis() {
        assert_eq!(compute_icon_size(Size::new(300, 100), Padding::default()), 100);
        assert_eq!(compute_icon_size(Size::new(100, 100), Padding::default()), 40);
    }

    #[test]
    fn icon_size_counts_horizontal_padding_twice() {
        let padding = Padding {
            top: 10,
            bottom: 10,
            start: 5,
            end: 5,
        };
        // height: 100 - 20 = 80; width: (300 - 20) / 2.5 = 112
        assert_eq!(compute_icon_size(Size::new(300, 100), padding), 80);
        // width: (100 - 20) / 2.5 = 32
        assert_eq!(compute_icon_size(Size::new(100, 100), padding), 32);
    }

    #[test]
    fn icon_size_clamps_to_zero() {
        assert_eq!(compute_icon_size(Size::new(4, 4), Padding::uniform(10)), 0);
        assert_eq!(compute_icon_size(Size::default(), Padding::default()), 0);
    }

    #[test]
    fn set_selected_always_invalidates() {
        let mut switch = ToggleSwitch::new(SwitchStyle::default(), RecordingHost::new());
        switch.set_selected_a(true);
        switch.set_selected_a(true);
        assert!(switch.is_selected_a());
        assert_eq!(switch.host().redraws, 2);
        assert_eq!(switch.host().relayouts, 2);

        switch.set_selected_a(false);
        assert!(!switch.is_selected_a());
    }

    #[test]
    fn with_selected_does_not_notify() {
        let switch = ToggleSwitch::new(SwitchStyle::default(), RecordingHost::new())
            .with_selected(Choice::B);
        assert_eq!(switch.selected(), Choice::B);
        assert_eq!(*switch.host(), RecordingHost::new());
    }

    #[test]
    fn measure_rasterizes_both_icons_at_same_size() {
        let switch = measured(300, 100);
        assert_eq!(switch.icon_size(), 100);
        let a = switch.icons().get(Choice::A).unwrap();
        let b = switch.icons().get(Choice::B).unwrap();
        assert_eq!((a.width(), a.height()), (100, 100));
        assert_eq!((b.width(), b.height()), (100, 100));
    }

    #[test]
    fn unspecified_axes_use_min_size() {
        let style = SwitchStyle::default().min_size(Size::new(150, 48));
        let mut switch = ToggleSwitch::new(style, ());
        let size = switch.measure(MeasureSpec::Unspecified, MeasureSpec::AtMost(30));
        assert_eq!(size, Size::new(150, 30));
        assert_eq!(switch.icon_size(), 30);
    }

    #[test]
    fn layout_with_new_size_rerasterizes() {
        let mut switch = measured(300, 100);
        switch.layout(Rect::from_ltrb(0.0, 0.0, 100.0, 50.0));
        assert_eq!(switch.icon_size(), 40);
        assert_eq!(switch.icons().get(Choice::A).map(RasterImage::width), Some(40));
    }

    #[test]
    fn draw_state_a_layout() {
        let switch = measured(300, 100);
        let mut canvas = RecordingCanvas::new();
        switch.draw(&mut canvas);

        let rects: Vec<_> = canvas.rects().collect();
        assert_eq!(rects[0], (Rect::from_ltrb(0.0, 0.0, 300.0, 100.0), switch.style().unchecked));
        assert_eq!(rects[1], (Rect::from_ltrb(0.0, 0.0, 200.0, 100.0), switch.style().checked));

        let images: Vec<_> = canvas.images().collect();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], (Choice::A, Point::new(50.0, 0.0), 1.0));
        assert_eq!(images[1].0, Choice::B);
        assert_eq!(images[1].1, Point::new(200.0, 0.0));
        assert!((images[1].2 - 75.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn draw_state_b_mirrors() {
        let mut switch = measured(300, 100);
        switch.set_selected(Choice::B);
        let mut canvas = RecordingCanvas::new();
        switch.draw(&mut canvas);

        let rects: Vec<_> = canvas.rects().collect();
        assert_eq!(rects[1].0, Rect::from_ltrb(100.0, 0.0, 300.0, 100.0));

        let images: Vec<_> = canvas.images().collect();
        assert_eq!(images[0].0, Choice::A);
        assert_eq!(images[0].1, Point::new(0.0, 0.0));
        assert!(images[0].2 < 1.0);
        assert_eq!(images[1], (Choice::B, Point::new(150.0, 0.0), 1.0));
    }

    #[test]
    fn draw_before_measure_paints_zones_only() {
        let switch = ToggleSwitch::<()>::default();
        let mut canvas = RecordingCanvas::new();
        switch.draw(&mut canvas);
        assert_eq!(canvas.rects().count(), 2);
        assert_eq!(canvas.images().count(), 0);
    }

    #[test]
    fn icons_are_vertically_centered() {
        let mut switch = ToggleSwitch::new(
            SwitchStyle::default().padding(Padding {
                top: 10,
                bottom: 10,
                start: 0,
                end: 0,
            }),
            (),
        );
        switch.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(100));
        switch.layout(Rect::from_size(Size::new(300, 100)));
        let mut canvas = RecordingCanvas::new();
        switch.draw(&mut canvas);
        for (_, origin, _) in canvas.images() {
            assert_eq!(origin.y, 10.0);
        }
    }

    #[test]
    fn tap_flips_and_requests_one_redraw() {
        let mut switch = measured(300, 100);
        assert!(switch.on_pointer_event(&PointerEvent::down(10.0, 10.0)));
        assert!(switch.on_pointer_event(&PointerEvent::up(10.0, 10.0)));
        assert!(!switch.is_selected_a());
        assert_eq!(switch.host().redraws, 1);
        assert_eq!(switch.host().relayouts, 0);
    }

    #[test]
    fn drag_is_not_consumed_and_keeps_state() {
        let mut switch = measured(300, 100);
        switch.on_pointer_event(&PointerEvent::down(10.0, 10.0));
        assert!(!switch.on_pointer_event(&PointerEvent::moved(120.0, 10.0)));
        assert!(!switch.on_pointer_event(&PointerEvent::up(120.0, 10.0)));
        assert!(switch.is_selected_a());
        assert_eq!(switch.host().redraws, 0);
    }

    #[test]
    fn cancel_is_not_consumed() {
        let mut switch = measured(300, 100);
        switch.on_pointer_event(&PointerEvent::down(10.0, 10.0));
        assert!(!switch.on_pointer_event(&PointerEvent::cancel()));
        assert!(switch.is_selected_a());
    }
}
