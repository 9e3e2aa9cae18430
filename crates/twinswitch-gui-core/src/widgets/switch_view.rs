//! Two-zone switch widget for egui.

use egui::{Response, Sense, Ui, Widget, vec2};
use twinswitch_core::{Choice, MeasureSpec, Rect, Size, ToggleSwitch};

use crate::canvas::{EguiCanvas, IconTextures};
use crate::host::EguiHost;
use crate::input::PointerRouter;

/// A [`ToggleSwitch`] placed in an egui layout.
///
/// Each frame the view allocates its rect, re-measures the switch when the
/// pixel size changed or a relayout was requested, routes pointer events,
/// and paints. The returned [`Response`] is marked changed on the frame the
/// selection flips.
pub struct SwitchView {
    switch: ToggleSwitch<EguiHost>,
    textures: IconTextures,
    router: PointerRouter,
    width: Option<f32>,
    height: f32,
}

impl SwitchView {
    /// Wrap a switch. Width defaults to the available width.
    pub fn new(switch: ToggleSwitch<EguiHost>) -> Self {
        Self {
            switch,
            textures: IconTextures::new(),
            router: PointerRouter::new(),
            width: None,
            height: 48.0,
        }
    }

    /// Set a fixed width in points.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height in points.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// The hosted switch.
    pub fn switch(&self) -> &ToggleSwitch<EguiHost> {
        &self.switch
    }

    /// Mutable access to the hosted switch.
    pub fn switch_mut(&mut self) -> &mut ToggleSwitch<EguiHost> {
        &mut self.switch
    }

    /// Current selection.
    pub fn selected(&self) -> Choice {
        self.switch.selected()
    }

    /// Allocate, handle input, and paint.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let (rect, mut response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());

        let pixels_per_point = ui.ctx().pixels_per_point();
        let to_px = |points: f32| (points * pixels_per_point).round().max(0.0) as u32;
        let size = Size::new(to_px(rect.width()), to_px(rect.height()));

        let relayout = self.switch.host_mut().take_relayout();
        if relayout || self.switch.size() != size {
            self.switch
                .measure(MeasureSpec::Exactly(size.width), MeasureSpec::Exactly(size.height));
            self.switch.layout(Rect::from_size(size));
        }

        let before = self.switch.selected();
        let (events, time) = ui.input(|i| (i.events.clone(), i.time));
        for event in &events {
            if let Some(pointer) = self.router.route(event, rect, pixels_per_point, time) {
                self.switch.on_pointer_event(&pointer);
            }
        }
        if self.switch.selected() != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let mut canvas =
                EguiCanvas::new(&painter, &mut self.textures, rect.min, pixels_per_point);
            self.switch.draw(&mut canvas);
        }

        response
    }
}

impl Widget for &mut SwitchView {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinswitch_core::SwitchStyle;

    fn view(ctx: &egui::Context) -> SwitchView {
        SwitchView::new(ToggleSwitch::new(
            SwitchStyle::default(),
            EguiHost::new(ctx.clone()),
        ))
        .width(300.0)
        .height(100.0)
    }

    fn run_frame(
        ctx: &egui::Context,
        view: &mut SwitchView,
        events: Vec<egui::Event>,
    ) -> (bool, egui::Rect) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut changed = false;
        let mut rect = egui::Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(&mut *view);
                changed = response.changed();
                rect = response.rect;
            });
        });
        (changed, rect)
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn first_frame_measures_switch() {
        let ctx = egui::Context::default();
        let mut view = view(&ctx);
        run_frame(&ctx, &mut view, Vec::new());
        assert!(view.switch().icon_size() > 0);
        assert!(view.switch().icons().is_ready());
    }

    #[test]
    fn relayout_request_triggers_remeasure() {
        let ctx = egui::Context::default();
        let mut view = view(&ctx);
        run_frame(&ctx, &mut view, Vec::new());

        view.switch_mut().set_selected(Choice::B);
        assert_eq!(view.selected(), Choice::B);
        run_frame(&ctx, &mut view, Vec::new());
        assert!(!view.switch_mut().host_mut().take_relayout());
    }

    #[test]
    fn tap_inside_flips_selection_and_marks_changed() {
        let ctx = egui::Context::default();
        let mut view = view(&ctx);
        let (_, rect) = run_frame(&ctx, &mut view, Vec::new());
        let center = rect.center();

        let (press_changed, _) = run_frame(&ctx, &mut view, vec![button(center, true)]);
        assert!(!press_changed);
        assert_eq!(view.selected(), Choice::A);

        let (release_changed, _) = run_frame(&ctx, &mut view, vec![button(center, false)]);
        assert!(release_changed);
        assert_eq!(view.selected(), Choice::B);
    }

    #[test]
    fn drag_across_switch_leaves_selection() {
        let ctx = egui::Context::default();
        let mut view = view(&ctx);
        let (_, rect) = run_frame(&ctx, &mut view, Vec::new());
        let start = rect.left_center() + egui::vec2(20.0, 0.0);
        let end = start + egui::vec2(100.0, 0.0);

        let (changed, _) = run_frame(
            &ctx,
            &mut view,
            vec![
                button(start, true),
                egui::Event::PointerMoved(end),
                button(end, false),
            ],
        );
        assert!(!changed);
        assert_eq!(view.selected(), Choice::A);
    }

    #[test]
    fn press_outside_is_ignored() {
        let ctx = egui::Context::default();
        let mut view = view(&ctx);
        let (_, rect) = run_frame(&ctx, &mut view, Vec::new());
        let outside = rect.right_bottom() + egui::vec2(10.0, 10.0);

        let (changed, _) = run_frame(
            &ctx,
            &mut view,
            vec![button(outside, true), button(outside, false)],
        );
        assert!(!changed);
        assert_eq!(view.selected(), Choice::A);
    }
}
