//! Drawing model: colors, tools, stroke style, display mode.
//!
//! Everything here is plain data. The controller in `sketch-editor` owns
//! one of each and reads them live on every pointer event.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────

/// 8-bit RGBA color. Also the pixel type of [`crate::raster::Raster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    /// Empty pixel. A cleared surface is entirely this value.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let mut channels = [255u8; 4];
                for (slot, &digit) in channels.iter_mut().zip(bytes) {
                    *slot = hex_val(digit)? * 17;
                }
                let [r, g, b, a] = channels;
                Some(Self::rgba(r, g, b, a))
            }
            6 | 8 => {
                let mut channels = [255u8; 4];
                for (slot, pair) in channels.iter_mut().zip(bytes.chunks(2)) {
                    *slot = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
                }
                let [r, g, b, a] = channels;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Emit as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    /// Lowercase, matching what `<input type="color">` reports.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid hex color: {value:?}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Tool mode ───────────────────────────────────────────────────────────

/// The active drawing tool. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Line,
}

impl ToolMode {
    pub const ALL: [ToolMode; 5] = [
        ToolMode::Brush,
        ToolMode::Eraser,
        ToolMode::Rectangle,
        ToolMode::Circle,
        ToolMode::Line,
    ];

    /// Stable name used across the JS bridge.
    pub fn name(self) -> &'static str {
        match self {
            ToolMode::Brush => "brush",
            ToolMode::Eraser => "eraser",
            ToolMode::Rectangle => "rectangle",
            ToolMode::Circle => "circle",
            ToolMode::Line => "line",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Toolbar button caption.
    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Brush => "🖌 Brush",
            ToolMode::Eraser => "🧹 Eraser",
            ToolMode::Rectangle => "⬛ Rectangle",
            ToolMode::Circle => "⚫ Circle",
            ToolMode::Line => "📏 Line",
        }
    }

    /// Freehand tools paint on every move; shape tools commit on release.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolMode::Brush | ToolMode::Eraser)
    }
}

// ─── Display mode ────────────────────────────────────────────────────────

/// Light/dark theme of the drawing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Background color behind the surface. The eraser paints with it.
    pub fn background(self) -> Color {
        match self {
            DisplayMode::Light => Color::WHITE,
            DisplayMode::Dark => Color::BLACK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// CSS class list for the container element.
    pub fn container_class(self) -> &'static str {
        match self {
            DisplayMode::Light => "paint-container light",
            DisplayMode::Dark => "paint-container dark",
        }
    }

    /// Caption of the theme toggle button.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "☀ Light",
            DisplayMode::Dark => "🌙 Dark",
        }
    }
}

// ─── Stroke style ────────────────────────────────────────────────────────

pub const MIN_STROKE_WIDTH: u32 = 1;
pub const MAX_STROKE_WIDTH: u32 = 20;
pub const DEFAULT_STROKE_WIDTH: u32 = 5;
/// The eraser ignores the width slider.
pub const ERASER_WIDTH: u32 = 20;

/// User-selected color and width for brush strokes and shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            color,
            width: width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the width, clamped into `min..=max`. Returns the stored value.
    pub fn set_width(&mut self, width: u32, min: u32, max: u32) -> u32 {
        self.width = width.clamp(min, max.max(min));
        self.width
    }
}
