//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The shortcut map lives in Rust so it's shared across WASM and native.

use sketch_core::ToolMode;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    Tool(ToolMode),

    // ── Style ──
    WidthDown,
    WidthUp,

    // ── Surface ──
    Clear,
    ToggleDisplayMode,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Tool(ToolMode::Brush) => "toolBrush",
            ShortcutAction::Tool(ToolMode::Eraser) => "toolEraser",
            ShortcutAction::Tool(ToolMode::Rectangle) => "toolRectangle",
            ShortcutAction::Tool(ToolMode::Circle) => "toolCircle",
            ShortcutAction::Tool(ToolMode::Line) => "toolLine",
            ShortcutAction::WidthDown => "widthDown",
            ShortcutAction::WidthUp => "widthUp",
            ShortcutAction::Clear => "clear",
            ShortcutAction::ToggleDisplayMode => "toggleDisplayMode",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// `ctrl` and `meta` are treated alike, so ⌘ on macOS and Ctrl elsewhere
/// trigger the same bindings.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"b"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if alt {
            return None;
        }

        if cmd {
            return match key {
                "Delete" | "Backspace" => Some(ShortcutAction::Clear),
                _ => None,
            };
        }

        if shift {
            // Shift+letter arrives as an uppercase key; keep tools reachable.
            return match key {
                "{" => Some(ShortcutAction::WidthDown),
                "}" => Some(ShortcutAction::WidthUp),
                _ => Self::single_key(key),
            };
        }

        Self::single_key(key)
    }

    fn single_key(key: &str) -> Option<ShortcutAction> {
        match key {
            "b" | "B" => Some(ShortcutAction::Tool(ToolMode::Brush)),
            "e" | "E" => Some(ShortcutAction::Tool(ToolMode::Eraser)),
            "r" | "R" => Some(ShortcutAction::Tool(ToolMode::Rectangle)),
            "c" | "C" => Some(ShortcutAction::Tool(ToolMode::Circle)),
            "l" | "L" => Some(ShortcutAction::Tool(ToolMode::Line)),
            "[" => Some(ShortcutAction::WidthDown),
            "]" => Some(ShortcutAction::WidthUp),
            "d" | "D" => Some(ShortcutAction::ToggleDisplayMode),
            _ => None,
        }
    }
}
