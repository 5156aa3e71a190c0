//! Pointer-driven drawing controller.
//!
//! Translates press / move / release into marks on an owned [`Surface`].
//!
//! | Tool | Press | Move | Release |
//! |------|-------|------|---------|
//! | **Brush** | open path at press point | paint new segment, user style | close path |
//! | **Eraser** | open path at press point | paint new segment, background color, fixed width | close path |
//! | **Rectangle** | record anchor | · | outline anchor ↔ release corners |
//! | **Circle** | record anchor | · | ring centered on anchor through release point |
//! | **Line** | record anchor | · | segment anchor → release |
//!
//! The tool, color and width are read when each event arrives, not when the
//! drag began. Switching tools mid-drag changes what the release commits.

use crate::input::InputEvent;
use crate::shortcuts::ShortcutAction;
use kurbo::Point;
use sketch_core::{Color, DisplayMode, SketchConfig, StrokeStyle, Surface, ToolMode};

/// Whether a pointer drag is in progress, and where it began.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: Point,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<Point> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { anchor } => Some(anchor),
        }
    }
}

/// Owns the drawing surface and the interaction state around it.
pub struct DrawingController<S: Surface> {
    surface: S,
    tool: ToolMode,
    style: StrokeStyle,
    display: DisplayMode,
    drag: DragState,
    eraser_width: u32,
    min_width: u32,
    max_width: u32,
}

impl<S: Surface> DrawingController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, &SketchConfig::default())
    }

    pub fn with_config(surface: S, config: &SketchConfig) -> Self {
        log::debug!(
            "drawing controller on {}x{} surface, tool={}",
            surface.width(),
            surface.height(),
            config.default_tool.name()
        );
        Self {
            surface,
            tool: config.default_tool,
            style: config.initial_style(),
            display: config.display_mode,
            drag: DragState::Idle,
            eraser_width: config.eraser_width,
            min_width: config.min_width,
            max_width: config.max_width,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface, ending the controller's lifetime.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn width(&self) -> u32 {
        self.style.width()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Dispatch a pointer event. Returns true if the surface changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let point = event.position();
        match event {
            InputEvent::PointerDown { .. } => {
                self.drag_start(point);
                false
            }
            InputEvent::PointerMove { .. } => self.drag_move(point),
            InputEvent::PointerUp { .. } => self.drag_end(point),
        }
    }

    pub fn drag_start(&mut self, point: Point) {
        self.drag = DragState::Dragging { anchor: point };
        if self.tool.is_freehand() {
            self.surface.begin_path();
            self.surface.move_to(point);
        }
    }

    /// Extend a freehand stroke. No-op unless a drag is active.
    pub fn drag_move(&mut self, point: Point) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        match self.tool {
            ToolMode::Brush => {
                self.paint_to(point, self.style.color, self.style.width());
                true
            }
            ToolMode::Eraser => {
                self.paint_to(point, self.display.background(), self.eraser_width);
                true
            }
            // Shapes have no live preview.
            ToolMode::Rectangle | ToolMode::Circle | ToolMode::Line => false,
        }
    }

    /// Commit the shape for the current tool and end the drag.
    /// No-op unless a drag is active.
    pub fn drag_end(&mut self, point: Point) -> bool {
        let DragState::Dragging { anchor } = self.drag else {
            return false;
        };

        let committed = match self.tool {
            ToolMode::Rectangle => {
                self.apply_style();
                self.surface.stroke_rect(
                    anchor.x,
                    anchor.y,
                    point.x - anchor.x,
                    point.y - anchor.y,
                );
                true
            }
            ToolMode::Circle => {
                self.apply_style();
                self.surface.stroke_circle(anchor, anchor.distance(point));
                true
            }
            ToolMode::Line => {
                self.apply_style();
                self.surface.begin_path();
                self.surface.move_to(anchor);
                self.surface.line_to(point);
                self.surface.stroke();
                true
            }
            ToolMode::Brush | ToolMode::Eraser => false,
        };
        if committed {
            log::debug!(
                "{} committed {anchor:?} -> {point:?} ({}, w={})",
                self.tool.name(),
                self.style.color,
                self.style.width()
            );
        }

        self.surface.begin_path();
        self.drag = DragState::Idle;
        committed
    }

    // ─── Controls ────────────────────────────────────────────────────────

    /// Wipe the whole surface to transparent.
    pub fn clear(&mut self) {
        let (w, h) = (self.surface.width() as f64, self.surface.height() as f64);
        self.surface.clear_rect(0.0, 0.0, w, h);
        log::debug!("surface cleared");
    }

    /// Returns true if the tool changed. An active drag keeps running.
    pub fn set_tool(&mut self, tool: ToolMode) -> bool {
        if tool == self.tool {
            return false;
        }
        log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        true
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Set the brush width, clamped to the configured range.
    /// Returns the width actually stored.
    pub fn set_width(&mut self, width: u32) -> u32 {
        let stored = self.style.set_width(width, self.min_width, self.max_width);
        if stored != width {
            log::debug!("width {width} clamped to {stored}");
        }
        stored
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display = mode;
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display = self.display.toggled();
        log::debug!("display mode -> {:?}", self.display);
        self.display
    }

    /// Apply a keyboard shortcut. Returns true if the surface changed.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Tool(tool) => {
                self.set_tool(tool);
                false
            }
            ShortcutAction::WidthDown => {
                self.set_width(self.width().saturating_sub(1));
                false
            }
            ShortcutAction::WidthUp => {
                self.set_width(self.width().saturating_add(1));
                false
            }
            ShortcutAction::Clear => {
                self.clear();
                true
            }
            ShortcutAction::ToggleDisplayMode => {
                self.toggle_display_mode();
                false
            }
        }
    }

    // ─── Private helpers ─────────────────────────────────────────────────

    fn apply_style(&mut self) {
        self.surface.set_stroke_color(self.style.color);
        self.surface.set_line_width(self.style.width() as f64);
    }

    fn paint_to(&mut self, point: Point, color: Color, width: u32) {
        self.surface.set_stroke_color(color);
        self.surface.set_line_width(width as f64);
        self.surface.line_to(point);
        self.surface.stroke();
    }
}
