//! Invalidation requests the switch issues to whatever hosts it.

/// The host side of the redraw/relayout protocol.
///
/// The switch never repaints or re-measures itself; it asks the host to
/// schedule a pass.
pub trait Host {
    /// Schedule a draw pass.
    fn request_redraw(&mut self);

    /// Schedule a measure and layout pass.
    fn request_relayout(&mut self);
}

/// Headless hosting: requests are dropped.
impl Host for () {
    fn request_redraw(&mut self) {}

    fn request_relayout(&mut self) {}
}

impl<H: Host + ?Sized> Host for &mut H {
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }

    fn request_relayout(&mut self) {
        (**self).request_relayout();
    }
}

/// A host that counts requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordingHost {
    /// Number of redraw requests received.
    pub redraws: usize,
    /// Number of relayout requests received.
    pub relayouts: usize,
}

impl RecordingHost {
    /// Create a host with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Host for RecordingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn request_relayout(&mut self) {
        self.relayouts += 1;
    }
}
