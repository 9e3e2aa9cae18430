//! Demo application state and frame loop.

use egui::Context;
use twinswitch_config::SwitchConfig;
use twinswitch_core::Choice;
use twinswitch_gui_core::{EguiHost, SwitchView, Theme};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// Selected-zone color.
    pub checked_color: Option<String>,
    /// Background color.
    pub unchecked_color: Option<String>,
    /// Start with B selected.
    pub select_b: bool,
}

impl Overrides {
    /// Write the overrides into `config`.
    pub fn apply(&self, config: &mut SwitchConfig) {
        if let Some(color) = &self.checked_color {
            config.color_checked = Some(color.clone());
        }
        if let Some(color) = &self.unchecked_color {
            config.color_unchecked = Some(color.clone());
        }
        if self.select_b {
            config.selected_a = Some(false);
        }
    }
}

/// Main application state.
pub struct SwitchApp {
    view: SwitchView,
    theme: Theme,
}

impl SwitchApp {
    /// Create the app from resolved configuration.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SwitchConfig, height: f32) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        let resolved = config.resolve();
        let switch = resolved.build(EguiHost::new(cc.egui_ctx.clone()));
        tracing::info!(
            checked = %resolved.style.checked,
            unchecked = %resolved.style.unchecked,
            selected = %resolved.initial,
            "switch created"
        );

        Self {
            view: SwitchView::new(switch).height(height),
            theme,
        }
    }

    fn select(&mut self, choice: Choice) {
        self.view.switch_mut().set_selected(choice);
        tracing::info!(selected = %choice, "selection set");
    }
}

impl eframe::App for SwitchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("twinswitch");
            ui.label(
                egui::RichText::new("Tap the switch to flip it. Dragging across it does nothing.")
                    .color(self.theme.text_secondary),
            );
            ui.add_space(8.0);

            let response = ui.add(&mut self.view);
            if response.changed() {
                tracing::info!(selected = %self.view.selected(), "selection toggled");
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Selected: {}", self.view.selected()))
                    .color(self.theme.accent)
                    .strong(),
            );

            ui.horizontal(|ui| {
                if ui.button("Select A").clicked() {
                    self.select(Choice::A);
                }
                if ui.button("Select B").clicked() {
                    self.select(Choice::B);
                }
            });
        });
    }
}
