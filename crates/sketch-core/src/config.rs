//! Startup configuration for a drawing surface.
//!
//! Hosts pass this as JSON across the WASM bridge; every field is optional
//! and falls back to [`SketchConfig::default`].

use crate::model::{
    Color, DEFAULT_STROKE_WIDTH, DisplayMode, ERASER_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
    StrokeStyle, ToolMode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SketchConfig {
    /// Subtracted from the viewport width when sizing the surface.
    pub margin_x: f64,
    /// Subtracted from the viewport height (room for the toolbar).
    pub margin_y: f64,
    pub eraser_width: u32,
    pub min_width: u32,
    pub max_width: u32,
    pub default_width: u32,
    pub default_color: Color,
    pub default_tool: ToolMode,
    pub display_mode: DisplayMode,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            margin_x: 50.0,
            margin_y: 100.0,
            eraser_width: ERASER_WIDTH,
            min_width: MIN_STROKE_WIDTH,
            max_width: MAX_STROKE_WIDTH,
            default_width: DEFAULT_STROKE_WIDTH,
            default_color: Color::BLACK,
            default_tool: ToolMode::Brush,
            display_mode: DisplayMode::Light,
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid sketch config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_width < 1 {
            return Err("minWidth must be at least 1".into());
        }
        if self.min_width > self.max_width {
            return Err(format!(
                "minWidth {} exceeds maxWidth {}",
                self.min_width, self.max_width
            ));
        }
        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            return Err(format!(
                "defaultWidth {} outside {}..={}",
                self.default_width, self.min_width, self.max_width
            ));
        }
        if self.eraser_width < 1 {
            return Err("eraserWidth must be at least 1".into());
        }
        if !(self.margin_x.is_finite() && self.margin_y.is_finite()) {
            return Err("margins must be finite".into());
        }
        Ok(())
    }

    /// Surface size for a viewport, computed once at mount.
    pub fn surface_size(&self, viewport_width: f64, viewport_height: f64) -> (u32, u32) {
        (
            shrink(viewport_width, self.margin_x),
            shrink(viewport_height, self.margin_y),
        )
    }

    pub fn initial_style(&self) -> StrokeStyle {
        let mut style = StrokeStyle::new(self.default_color, self.default_width);
        style.set_width(self.default_width, self.min_width, self.max_width);
        style
    }
}

fn shrink(extent: f64, margin: f64) -> u32 {
    let size = (extent - margin).floor();
    if size.is_nan() || size <= 0.0 {
        0
    } else {
        size.min(u32::MAX as f64) as u32
    }
}
