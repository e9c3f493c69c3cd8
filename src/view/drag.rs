//! Drag state machine translating mouse events into marker mutations.
//!
//! An explicit three-state machine transitioned only on discrete input
//! events: `Moved` re-derives hover from the hit test, `Down` captures a
//! marker, `Drag` feeds candidate positions to `Markers::try_move`, `Up`
//! releases. A rejected move changes neither the machine state nor the
//! marker; the marker simply stays put for that event. Releasing the button
//! is the only way out of a drag and the marker keeps its last accepted
//! position (no rollback).

use crossterm::event::{MouseButton, MouseEventKind};

use crate::markers::Markers;
use crate::scale::Scale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Hovering(usize),
    Dragging(usize),
}

/// Notification emitted on every accepted move: the full boundary list in
/// score space, copied, sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryChange {
    pub boundaries: Vec<f64>,
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed one mouse event, already translated to a local pixel position.
    /// Returns a [`BoundaryChange`] when a marker actually moved.
    pub fn on_mouse(
        &mut self,
        kind: MouseEventKind,
        pixel: f64,
        markers: &mut Markers,
        scale: &Scale,
    ) -> Option<BoundaryChange> {
        match kind {
            MouseEventKind::Moved => {
                self.state = match markers.hit_test(pixel) {
                    Some(index) => DragState::Hovering(index),
                    None => DragState::Idle,
                };
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.state = match markers.begin_drag(pixel) {
                    Some(index) => DragState::Dragging(index),
                    None => DragState::Idle,
                };
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let DragState::Dragging(index) = self.state
                    && markers.try_move(index, pixel)
                {
                    return Some(BoundaryChange {
                        boundaries: markers.scores(scale),
                    });
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                markers.end_drag();
                self.state = DragState::Idle;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "drag_test.rs"]
mod tests;
