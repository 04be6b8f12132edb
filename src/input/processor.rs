//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (last cursor
//! position, active drag mode). It is the only thing that sits between
//! raw window events and the engine's
//! [`execute`](crate::engine::HolowinEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use crate::engine::HolowinCommand;

/// Which gesture a drag performs.
///
/// Selected by the button that initiated the drag and held for the
/// drag's entire duration — switching buttons mid-hold starts a new
/// drag rather than blending modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Primary-button drag: spin/tilt the model.
    Rotate,
    /// Secondary-button drag: translate the model in the window plane.
    Pan,
}

/// Converts raw window events into [`HolowinCommand`]s.
///
/// Owns the transient gesture state. Cursor deltas are computed here
/// from absolute positions, so callers feed events straight through
/// without tracking anything themselves.
pub struct InputProcessor {
    last_cursor_pos: Vec2,
    active_drag: Option<DragMode>,
}

impl InputProcessor {
    /// Create a processor with no active drag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor_pos: Vec2::ZERO,
            active_drag: None,
        }
    }

    /// The drag currently in progress, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<DragMode> {
        self.active_drag
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<HolowinCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::PointerButton { button, pressed } => {
                self.handle_button(button, pressed);
                None
            }
            InputEvent::Scroll { delta_y } => {
                Some(HolowinCommand::DollyModel { delta: delta_y })
            }
        }
    }

    /// Cursor moved — compute the delta and, mid-drag, produce the
    /// gesture command for the mode fixed at drag start.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<HolowinCommand> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.last_cursor_pos;
        self.last_cursor_pos = pos;

        match self.active_drag? {
            DragMode::Rotate => Some(HolowinCommand::RotateModel { delta }),
            DragMode::Pan => Some(HolowinCommand::PanModel { delta }),
        }
    }

    /// Button press starts a drag in the button's mode; any release ends
    /// the drag.
    fn handle_button(&mut self, button: PointerButton, pressed: bool) {
        if pressed {
            self.active_drag = Some(match button {
                PointerButton::Primary => DragMode::Rotate,
                PointerButton::Secondary | PointerButton::Middle => {
                    DragMode::Pan
                }
            });
        } else {
            self.active_drag = None;
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
