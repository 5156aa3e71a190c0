//! In-memory software rasterizer.
//!
//! Coverage is binary: a pixel is painted when its center lies inside the
//! stroked outline. Path strokes are capsules, so joints and line ends come
//! out round.

use crate::model::Color;
use crate::surface::{Surface, normalized_rect};
use kurbo::{Point, Rect, Vec2};

/// A fixed-size RGBA pixel grid implementing [`Surface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    stroke_color: Color,
    line_width: u32,
    path: PathState,
}

/// Open path: every segment plus how many have already been rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PathState {
    cursor: Option<(i64, i64)>,
    segments: Vec<((i64, i64), (i64, i64))>,
    stroked: usize,
}

// Points are stored in 1/256 px fixed point so `Raster` can stay `Eq`.
const SUBPIXEL: f64 = 256.0;

fn quantize(p: Point) -> (i64, i64) {
    ((p.x * SUBPIXEL).round() as i64, (p.y * SUBPIXEL).round() as i64)
}

fn dequantize((x, y): (i64, i64)) -> Point {
    Point::new(x as f64 / SUBPIXEL, y as f64 / SUBPIXEL)
}

impl Raster {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        log::info!("allocating {width}x{height} raster surface");
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
            stroke_color: Color::BLACK,
            line_width: SUBPIXEL as u32,
            path: PathState::default(),
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// True when no pixel has been painted (or everything was cleared).
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(Color::is_transparent)
    }

    /// Number of non-transparent pixels.
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Inclusive pixel bounds `(min_x, min_y, max_x, max_y)` of painted content.
    pub fn painted_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[self.index(x, y)].is_transparent() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn half_width(&self) -> f64 {
        self.line_width as f64 / SUBPIXEL / 2.0
    }

    /// Set every pixel whose center is inside `area` and passes `covers`.
    fn fill_where(&mut self, area: Rect, color: Color, covers: impl Fn(Point) -> bool) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            pixel_span(area.x0, area.x1, self.width),
            pixel_span(area.y0, area.y1, self.height),
        ) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if covers(center) {
                    let idx = self.index(x, y);
                    self.pixels[idx] = color;
                }
            }
        }
    }

    fn paint_segment(&mut self, from: Point, to: Point) {
        let hw = self.half_width();
        log::trace!("segment {from:?} -> {to:?} w={}", hw * 2.0);
        let area = Rect::from_points(from, to).inflate(hw, hw);
        self.fill_where(area, self.stroke_color, |c| {
            distance_to_segment(c, from, to) <= hw
        });
    }
}

impl Surface for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores non-positive and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.line_width = (width * SUBPIXEL).round() as u32;
        }
    }

    fn begin_path(&mut self) {
        self.path = PathState::default();
    }

    fn move_to(&mut self, point: Point) {
        if !point.is_finite() {
            log::warn!("ignoring move_to {point:?}");
            return;
        }
        self.path.cursor = Some(quantize(point));
    }

    fn line_to(&mut self, point: Point) {
        if !point.is_finite() {
            log::warn!("ignoring line_to {point:?}");
            return;
        }
        let to = quantize(point);
        if let Some(from) = self.path.cursor {
            self.path.segments.push((from, to));
        }
        self.path.cursor = Some(to);
    }

    fn stroke(&mut self) {
        let pending: Vec<_> = self.path.segments[self.path.stroked..].to_vec();
        self.path.stroked = self.path.segments.len();
        for (from, to) in pending {
            self.paint_segment(dequantize(from), dequantize(to));
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if width == 0.0 && height == 0.0 {
            return;
        }
        let rect = normalized_rect(x, y, width, height);
        let hw = self.half_width();
        let outer = rect.inflate(hw, hw);
        let inner = rect.inset(-hw);
        log::trace!("rect outline {rect:?} w={}", hw * 2.0);
        self.fill_where(outer, self.stroke_color, |c| {
            !(c.x > inner.x0 && c.x < inner.x1 && c.y > inner.y0 && c.y < inner.y1)
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        if !(radius.is_finite() && radius >= 0.0) {
            log::warn!("ignoring circle with radius {radius}");
            return;
        }
        let hw = self.half_width();
        let reach = radius + hw;
        let area = Rect::new(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
        );
        log::trace!("circle {center:?} r={radius} w={}", hw * 2.0);
        self.fill_where(area, self.stroke_color, |c| {
            (c.distance(center) - radius).abs() <= hw
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let area = normalized_rect(x, y, width, height);
        self.fill_where(area, Color::TRANSPARENT, |_| true);
    }
}

/// Inclusive range of pixel indices whose centers fall in `[lo, hi]`,
/// clipped to `0..len`.
fn pixel_span(lo: f64, hi: f64, len: u32) -> Option<(u32, u32)> {
    if len == 0 || lo.is_nan() || hi.is_nan() || hi < lo {
        return None;
    }
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).floor().min(len as f64 - 1.0);
    if end < start {
        return None;
    }
    Some((start as u32, end as u32))
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab: Vec2 = b - a;
    let ap: Vec2 = p - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return ap.hypot();
    }
    let t = (ap.dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}
