#![allow(dead_code)]

use graphpad::{Color, Surface, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Line(Vec2, Vec2),
    Quad(Vec2, Vec2, Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    Triangle(Vec2, Vec2, Vec2),
    Circle(Vec2, f32, Color),
    Text(String, Vec2),
}

/// Surface that records every primitive instead of drawing it.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _color: Color) {
        self.ops.push(Op::Line(from, to));
    }
    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, _color: Color) {
        self.ops.push(Op::Quad(from, control, to));
    }
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, _color: Color) {
        self.ops.push(Op::Arc { center, radius, start, end });
    }
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, _color: Color) {
        self.ops.push(Op::Triangle(a, b, c));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(Op::Circle(center, radius, color));
    }
    fn measure_text(&mut self, text: &str) -> f32 {
        6.0 * text.chars().count() as f32
    }
    fn draw_text(&mut self, text: &str, at: Vec2, _color: Color) {
        self.ops.push(Op::Text(text.to_string(), at));
    }
}
