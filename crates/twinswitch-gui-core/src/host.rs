//! [`Host`] implementation backed by an egui context.

use twinswitch_core::Host;

/// Forwards switch invalidation requests to egui.
///
/// egui repaints the whole frame, so a relayout is a repaint plus a flag
/// telling the owning view to re-measure before the next draw.
#[derive(Debug, Clone)]
pub struct EguiHost {
    ctx: egui::Context,
    relayout_pending: bool,
}

impl EguiHost {
    /// Create a host for the given context.
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            relayout_pending: false,
        }
    }

    /// Return and clear the pending relayout flag.
    pub fn take_relayout(&mut self) -> bool {
        std::mem::take(&mut self.relayout_pending)
    }
}

impl Host for EguiHost {
    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }

    fn request_relayout(&mut self) {
        self.relayout_pending = true;
        self.ctx.request_repaint();
    }
}
