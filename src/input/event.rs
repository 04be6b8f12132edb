/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`HolowinCommand`](crate::engine::HolowinCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// ) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel. Positive `delta_y` is a screen-down scroll, which
    /// pushes the model away from the viewer.
    Scroll {
        /// Vertical scroll amount in pixel-equivalent units.
        delta_y: f32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button — starts a rotate drag.
    Primary,
    /// Secondary (right) button — starts a pan drag.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}
