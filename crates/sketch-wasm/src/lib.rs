//! WASM bridge for Sketchpad: exposes the drawing controller to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the
//! toolbar and forwards mouse events in canvas-local (`offsetX/offsetY`)
//! coordinates.

mod canvas2d;
mod console;

use canvas2d::Canvas2dSurface;
use sketch_core::{Color, DisplayMode, SketchConfig, Surface, ToolMode};
use sketch_editor::{DrawingController, InputEvent, ShortcutMap};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// The main WASM-facing drawing surface.
///
/// Holds the controller and, through it, the canvas context for the whole
/// lifetime of the page. All interaction from JS goes through this struct.
#[wasm_bindgen]
pub struct SketchCanvas {
    controller: DrawingController<Canvas2dSurface>,
}

#[wasm_bindgen]
impl SketchCanvas {
    /// Size `canvas` from the viewport (minus toolbar margins) and attach.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: &HtmlCanvasElement,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<SketchCanvas, JsValue> {
        Self::build(canvas, viewport_width, viewport_height, SketchConfig::default())
    }

    /// Like `new`, with a JSON `SketchConfig` (camelCase keys, all optional).
    pub fn with_config(
        canvas: &HtmlCanvasElement,
        viewport_width: f64,
        viewport_height: f64,
        config_json: &str,
    ) -> Result<SketchCanvas, JsValue> {
        let config = SketchConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(canvas, viewport_width, viewport_height, config)
    }

    /// Handle mouse down. Returns true if the surface changed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(&InputEvent::from_pointer_down(x, y))
    }

    /// Handle mouse move. Returns true if the surface changed.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(&InputEvent::from_pointer_move(x, y))
    }

    /// Handle mouse up. Returns true if a shape was committed.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(&InputEvent::from_pointer_up(x, y))
    }

    /// Switch tool by name (`brush`, `eraser`, `rectangle`, `circle`, `line`).
    /// Returns `false` for unknown names.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match ToolMode::from_name(name) {
            Some(tool) => {
                self.controller.set_tool(tool);
                true
            }
            None => {
                log::warn!("unknown tool {name:?}");
                false
            }
        }
    }

    pub fn get_tool_name(&self) -> String {
        self.controller.tool().name().to_string()
    }

    /// Set the stroke color from a hex string. Returns `false` if unparsable.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                self.controller.set_color(color);
                true
            }
            None => {
                log::warn!("rejected color {hex:?}");
                false
            }
        }
    }

    pub fn get_color(&self) -> String {
        self.controller.color().to_hex()
    }

    /// Set the brush width. Returns the clamped value actually applied.
    pub fn set_width(&mut self, width: u32) -> u32 {
        self.controller.set_width(width)
    }

    pub fn get_width(&self) -> u32 {
        self.controller.width()
    }

    /// Wipe the canvas.
    pub fn clear(&mut self) {
        self.controller.clear();
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        let mode = if is_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        };
        self.controller.set_display_mode(mode);
    }

    /// Flip light/dark. Returns the new toggle button caption.
    pub fn toggle_theme(&mut self) -> String {
        self.controller.toggle_display_mode().label().to_string()
    }

    pub fn is_dark(&self) -> bool {
        self.controller.display_mode().is_dark()
    }

    pub fn theme_label(&self) -> String {
        self.controller.display_mode().label().to_string()
    }

    /// CSS classes for the container element.
    pub fn container_class(&self) -> String {
        self.controller.display_mode().container_class().to_string()
    }

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>", "tool":"<tool_name>"}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return key_response(false, "none", self.controller.tool());
        };
        let changed = self.controller.apply_shortcut(action);
        key_response(changed, action.name(), self.controller.tool())
    }

    pub fn surface_width(&self) -> u32 {
        self.controller.surface().width()
    }

    pub fn surface_height(&self) -> u32 {
        self.controller.surface().height()
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl SketchCanvas {
    fn build(
        canvas: &HtmlCanvasElement,
        viewport_width: f64,
        viewport_height: f64,
        config: SketchConfig,
    ) -> Result<SketchCanvas, JsValue> {
        console::init(log::LevelFilter::Info);
        let (width, height) = config.surface_size(viewport_width, viewport_height);
        let surface = Canvas2dSurface::new(canvas, width, height)?;
        Ok(Self {
            controller: DrawingController::with_config(surface, &config),
        })
    }
}

fn key_response(changed: bool, action: &str, tool: ToolMode) -> String {
    serde_json::json!({
        "changed": changed,
        "action": action,
        "tool": tool.name(),
    })
    .to_string()
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Set the console log level (`error`, `warn`, `info`, `debug`, `trace`,
/// `off`). Returns `false` for unknown names.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match console::parse_level(level) {
        Some(filter) => {
            console::set_level(filter);
            true
        }
        None => false,
    }
}

/// Toolbar tools as JSON: `[{"name":"brush","label":"🖌 Brush"}, ...]`.
#[wasm_bindgen]
pub fn tool_list() -> String {
    let tools: Vec<serde_json::Value> = ToolMode::ALL
        .into_iter()
        .map(|tool| serde_json::json!({ "name": tool.name(), "label": tool.label() }))
        .collect();
    serde_json::Value::Array(tools).to_string()
}

/// Toolbar caption for a tool name, or empty string if unknown.
#[wasm_bindgen]
pub fn tool_label(name: &str) -> String {
    ToolMode::from_name(name)
        .map(|tool| tool.label().to_string())
        .unwrap_or_default()
}
