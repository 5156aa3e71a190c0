pub mod controller;
pub mod input;
pub mod shortcuts;

pub use controller::{DragState, DrawingController};
pub use input::InputEvent;
pub use shortcuts::{ShortcutAction, ShortcutMap};
