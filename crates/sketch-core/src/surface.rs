//! The raster surface abstraction.
//!
//! Mirrors the subset of a Canvas2D context that drawing needs. Path
//! operations follow canvas semantics: `line_to` on an empty path only
//! positions the cursor, and `stroke` uses the color and width current at
//! the time of the call. Non-finite points are dropped.
//!
//! Implementations:
//! - [`crate::raster::Raster`]: in-memory pixel grid (native, tests).
//! - `Canvas2dSurface` in `sketch-wasm`: an HTML `<canvas>`.

use kurbo::{Point, Rect};

/// A fixed-size pixel surface that strokes can be rendered onto.
///
/// All operations clip to the surface bounds. None of them resize it.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn set_stroke_color(&mut self, color: crate::model::Color);
    fn set_line_width(&mut self, width: f64);

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Render the open path. Segments already stroked are not repainted.
    fn stroke(&mut self);

    /// Stroke the outline of the rectangle spanned by `(x, y)` and
    /// `(x + width, y + height)`. Negative extents are allowed.
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Stroke a full circle around `center`.
    fn stroke_circle(&mut self, center: Point, radius: f64);

    /// Reset the region to transparent. Negative extents are allowed.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Normalize a corner + extent rectangle that may have negative extents.
pub fn normalized_rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height).abs()
}
