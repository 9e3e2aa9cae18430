//! Visual styling for the twinswitch demo window.

use egui::{Color32, Style, Visuals};

/// Theme colors for the window around the switch.
pub struct Theme {
    /// Panel background color.
    pub panel_bg: Color32,
    /// Accent color for highlighted text.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_bg: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(0x03, 0xA9, 0xF4),
            text_primary: Color32::from_rgb(33, 33, 33),
            text_secondary: Color32::from_rgb(117, 117, 117),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        // Light visuals to match the default switch palette
        let mut visuals = Visuals::light();
        visuals.panel_fill = self.panel_bg;
        visuals.override_text_color = Some(self.text_primary);
        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(8.0, 10.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_panel_and_text_colors() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        theme.apply(&ctx);

        let style = ctx.style();
        assert_eq!(style.visuals.panel_fill, theme.panel_bg);
        assert_eq!(style.visuals.override_text_color, Some(theme.text_primary));
        assert!(!style.visuals.dark_mode);
    }
}
