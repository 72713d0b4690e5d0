use std::f64::consts::TAU;

use graphpad::{Color, Surface, Vec2};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_baseline("middle");
        ctx.set_font("12px sans-serif");
        Ok(CanvasSurface { ctx })
    }
}

fn css(c: Color) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a as f64 / 255.0)
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&css(color));
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, color: Color) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&css(color));
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.quadratic_curve_to(control.x as f64, control.y as f64, to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&css(color));
        ctx.begin_path();
        let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, start as f64, end as f64);
        ctx.stroke();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&css(color));
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.line_to(c.x as f64, c.y as f64);
        ctx.close_path();
        ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&css(color));
        ctx.begin_path();
        let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.fill();
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        self.ctx.measure_text(text).map_or(0.0, |m| m.width() as f32)
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
