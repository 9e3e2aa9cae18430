//! Tap-versus-drag classification of pointer streams.
//!
//! A pointer sequence is a tap when it is released within `slop` pixels of
//! where it went down. Any intermediate move or release farther away turns
//! it into a drag.
//!
//! [`TapTracker`] classifies incrementally, one event at a time, and is what
//! the switch feeds from its input handler. [`classify`] runs the same rules
//! over a complete stream.

use crate::geometry::{Density, Point};
use core::time::Duration;

/// Default movement tolerance in density-independent pixels.
pub const DEFAULT_TOUCH_SLOP_DP: f32 = 8.0;

/// Default touch slop in pixels for a given density.
pub fn default_touch_slop(density: Density) -> f32 {
    density.dp_to_px_f32(DEFAULT_TOUCH_SLOP_DP)
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Sequence aborted by the host.
    Cancel,
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub kind: PointerKind,
    /// Position relative to the widget's top-left corner.
    pub position: Point,
    /// Host timestamp.
    pub timestamp: Duration,
}

impl PointerEvent {
    /// Create an event at time zero.
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            timestamp: Duration::ZERO,
        }
    }

    /// Pointer pressed at `(x, y)`.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    /// Pointer moved to `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    /// Pointer released at `(x, y)`.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// Sequence cancelled.
    pub fn cancel() -> Self {
        Self::new(PointerKind::Cancel, 0.0, 0.0)
    }

    /// Attach a timestamp.
    pub fn at(mut self, timestamp: Duration) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A completed pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Released without leaving the slop radius.
    Tap,
    /// Released after moving beyond the slop radius.
    Drag,
    /// Aborted by the host.
    Cancelled,
}

/// Result of feeding one event to a [`TapTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// A press started a new sequence.
    Pressed,
    /// The sequence is still open (or there is none).
    Pending,
    /// The sequence ended.
    Complete(Gesture),
}

/// Incremental tap/drag classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TapTracker {
    slop: f32,
    down_at: Option<Point>,
    dragging: bool,
}

impl TapTracker {
    /// Create a tracker with the given movement tolerance in pixels.
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            down_at: None,
            dragging: false,
        }
    }

    /// Movement tolerance in pixels.
    pub fn slop(&self) -> f32 {
        self.slop
    }

    /// Whether a press is in progress.
    pub fn is_tracking(&self) -> bool {
        self.down_at.is_some()
    }

    /// Whether the current press has moved beyond the slop.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Forget any sequence in progress.
    pub fn reset(&mut self) {
        self.down_at = None;
        self.dragging = false;
    }

    fn exceeds_slop(&self, p: Point) -> bool {
        self.down_at.is_some_and(|d| d.distance(p) > self.slop)
    }

    /// Advance with one event.
    ///
    /// A release with no tracked press counts as a tap.
    pub fn feed(&mut self, event: &PointerEvent) -> Feed {
        match event.kind {
            PointerKind::Down => {
                self.down_at = Some(event.position);
                self.dragging = false;
                Feed::Pressed
            }
            PointerKind::Move => {
                if self.exceeds_slop(event.position) {
                    self.dragging = true;
                }
                Feed::Pending
            }
            PointerKind::Up => {
                let dragged = self.dragging || self.exceeds_slop(event.position);
                self.reset();
                Feed::Complete(if dragged { Gesture::Drag } else { Gesture::Tap })
            }
            PointerKind::Cancel => {
                self.reset();
                Feed::Complete(Gesture::Cancelled)
            }
        }
    }
}

/// Classify a complete event stream, returning one gesture per finished sequence.
pub fn classify<'a, I>(events: I, slop: f32) -> Vec<Gesture>
where
    I: IntoIterator<Item = &'a PointerEvent>,
{
    let mut tracker = TapTracker::new(slop);
    events
        .into_iter()
        .filter_map(|e| match tracker.feed(e) {
            Feed::Complete(g) => Some(g),
            Feed::Pressed | Feed::Pending => None,
        })
        .collect()
}
