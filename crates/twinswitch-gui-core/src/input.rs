//! Translate egui input events into switch pointer events.
//!
//! Only the primary button and pointer motion are translated. A sequence is
//! forwarded only if it started inside the widget; stray releases and moves
//! elsewhere on screen never reach the switch.

use core::time::Duration;
use egui::{Event, PointerButton, Pos2};
use twinswitch_core::{PointerEvent, PointerKind};

/// Routes egui events to one widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerRouter {
    pressed: bool,
}

impl PointerRouter {
    /// Create a router with no sequence in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press that started inside the widget is in progress.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate one event.
    ///
    /// `rect` is the widget's screen rect in points, `pixels_per_point`
    /// converts the local position to the switch's pixel space, and `time`
    /// is egui's input time in seconds.
    pub fn route(
        &mut self,
        event: &Event,
        rect: egui::Rect,
        pixels_per_point: f32,
        time: f64,
    ) -> Option<PointerEvent> {
        let (kind, pos) = match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if !rect.contains(*pos) {
                    return None;
                }
                self.pressed = true;
                (PointerKind::Down, *pos)
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } if self.pressed => {
                self.pressed = false;
                (PointerKind::Up, *pos)
            }
            Event::PointerMoved(pos) if self.pressed => (PointerKind::Move, *pos),
            Event::PointerGone if self.pressed => {
                self.pressed = false;
                (PointerKind::Cancel, rect.min)
            }
            _ => return None,
        };

        Some(local_event(kind, pos, rect.min, pixels_per_point, time))
    }
}

fn local_event(
    kind: PointerKind,
    pos: Pos2,
    origin: Pos2,
    pixels_per_point: f32,
    time: f64,
) -> PointerEvent {
    let local = (pos - origin) * pixels_per_point;
    PointerEvent::new(kind, local.x, local.y).at(Duration::from_secs_f64(time.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, pos2};

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    fn rect() -> egui::Rect {
        egui::Rect::from_min_max(pos2(100.0, 50.0), pos2(250.0, 100.0))
    }

    #[test]
    fn press_inside_is_translated_to_local_pixels() {
        let mut router = PointerRouter::new();
        let ev = router.route(&button(110.0, 60.0, true), rect(), 2.0, 1.5).unwrap();
        assert_eq!(ev.kind, PointerKind::Down);
        assert_eq!((ev.position.x, ev.position.y), (20.0, 20.0));
        assert_eq!(ev.timestamp, Duration::from_millis(1500));
        assert!(router.is_pressed());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut router = PointerRouter::new();
        assert!(router.route(&button(10.0, 10.0, true), rect(), 1.0, 0.0).is_none());
        assert!(router.route(&button(10.0, 10.0, false), rect(), 1.0, 0.0).is_none());
    }

    #[test]
    fn release_after_press_is_forwarded_even_outside() {
        let mut router = PointerRouter::new();
        router.route(&button(110.0, 60.0, true), rect(), 1.0, 0.0);
        let moved = router.route(&Event::PointerMoved(pos2(400.0, 60.0)), rect(), 1.0, 0.0);
        assert_eq!(moved.map(|e| e.kind), Some(PointerKind::Move));
        let up = router.route(&button(400.0, 60.0, false), rect(), 1.0, 0.0);
        assert_eq!(up.map(|e| e.kind), Some(PointerKind::Up));
        assert!(!router.is_pressed());
    }

    #[test]
    fn pointer_gone_cancels() {
        let mut router = PointerRouter::new();
        router.route(&button(110.0, 60.0, true), rect(), 1.0, 0.0);
        let ev = router.route(&Event::PointerGone, rect(), 1.0, 0.0);
        assert_eq!(ev.map(|e| e.kind), Some(PointerKind::Cancel));
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut router = PointerRouter::new();
        let ev = Event::PointerButton {
            pos: pos2(110.0, 60.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::default(),
        };
        assert!(router.route(&ev, rect(), 1.0, 0.0).is_none());
    }
}
