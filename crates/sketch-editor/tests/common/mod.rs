//! Shared helpers for sketch-editor integration tests.

#![allow(dead_code)]

use sketch_core::{Color, Point, Surface};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single primitive call received by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetStrokeColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeCircle { center: Point, radius: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
}

/// Surface that records every call instead of rasterizing.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// `(color, width)` in effect for each stroking call, in order.
    pub fn strokes(&self) -> Vec<(Color, f64)> {
        let mut color = Color::BLACK;
        let mut width = 1.0;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::SetStrokeColor(c) => color = *c,
                SurfaceOp::SetLineWidth(w) => width = *w,
                SurfaceOp::Stroke
                | SurfaceOp::StrokeRect { .. }
                | SurfaceOp::StrokeCircle { .. } => out.push((color, width)),
                SurfaceOp::BeginPath
                | SurfaceOp::MoveTo(_)
                | SurfaceOp::LineTo(_)
                | SurfaceOp::ClearRect { .. } => {}
            }
        }
        out
    }

    pub fn count(&self, pred: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(*op)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::StrokeRect { x, y, width, height });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        self.ops.push(SurfaceOp::StrokeCircle { center, radius });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::ClearRect { x, y, width, height });
    }
}
