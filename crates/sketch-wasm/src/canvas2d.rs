//! `Surface` backed by an HTML `<canvas>` 2D context.
//!
//! A thin pass-through: the browser does the rasterization, clipping and
//! negative-extent handling.

use sketch_core::{Color, Point, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    /// End of the open path, if any.
    pen: Option<Point>,
}

impl Canvas2dSurface {
    /// Size the canvas element once and take its 2D context.
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        log::info!("canvas surface {width}x{height}");
        Ok(Self {
            ctx,
            width,
            height,
            pen: None,
        })
    }
}

impl Surface for Canvas2dSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_hex());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
        self.pen = None;
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
        // Canvas drops non-finite points.
        if point.is_finite() {
            self.pen = Some(point);
        }
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
        // Canvas drops non-finite points.
        if point.is_finite() {
            self.pen = Some(point);
        }
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
        // Canvas re-strokes the whole open path; restart it at the pen so
        // the next stroke only covers the newest segment.
        if let Some(pen) = self.pen {
            self.ctx.begin_path();
            self.ctx.move_to(pen.x, pen.y);
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        self.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc r={radius} rejected: {err:?}");
            return;
        }
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }
}
