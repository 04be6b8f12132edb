//! Pointer input interpretation.
//!
//! Raw platform events (cursor motion, button presses, scroll) are
//! converted into engine commands by an [`InputProcessor`], which owns
//! all transient gesture state. The engine never cares how a command was
//! triggered — pointer gesture, GUI control, or programmatic call all
//! look identical.

/// Platform-agnostic input event vocabulary.
pub mod event;
/// Drag-gesture state machine producing engine commands.
pub mod processor;

pub use event::{InputEvent, PointerButton};
pub use processor::{DragMode, InputProcessor};
