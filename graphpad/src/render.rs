//! Drawing through an abstract surface. The renderer only reads the store;
//! calling it any number of times leaves the graph unchanged.

use std::f32::consts::TAU;

use crate::config::ViewportConfig;
use crate::model::{Color, Vec2};
use crate::shape::EdgeShape;
use crate::Graph;

/// Pixel primitives supplied by the host (a 2D canvas in the browser).
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, color: Color);
    /// Arc from `start` to `end` radians, increasing angle.
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn measure_text(&mut self, text: &str) -> f32;
    /// `at` is the left end of the text's vertical middle.
    fn draw_text(&mut self, text: &str, at: Vec2, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    /// Show node numbers instead of letter labels.
    pub show_numbers: bool,
    pub ink: Color,
    pub highlight: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            show_numbers: false,
            ink: Color::BLACK,
            highlight: Color::rgba(121, 121, 121, 64),
        }
    }
}

pub fn render<S: Surface + ?Sized>(g: &Graph, cfg: &ViewportConfig, style: &RenderStyle, s: &mut S) {
    s.clear(cfg.width, cfg.height);
    draw_nodes(g, cfg, style, s);
    for (id, e) in g.edges() {
        let Some(shape) = g.edge_shape(id, cfg) else { continue };
        draw_shape(&shape, style.ink, s);
        if e.direction.is_directed() {
            if let Some(a) = shape.arrowhead(cfg) {
                s.fill_triangle(a.tip, a.left, a.right, style.ink);
            }
        }
    }
    let sel = g.selection();
    if let (Some(from), Some(p)) = (sel.selected.and_then(|id| g.get_node(id)), sel.temp_edge) {
        draw_shape(&EdgeShape::between(from.pos(), p, 0.0, cfg), style.ink, s);
    }
}

fn draw_nodes<S: Surface + ?Sized>(g: &Graph, cfg: &ViewportConfig, style: &RenderStyle, s: &mut S) {
    let sel = g.selection();
    for (id, n) in g.nodes() {
        let c = n.pos();
        if sel.selected == Some(id) || sel.dragging == Some(id) {
            s.fill_circle(c, cfg.node_radius, style.highlight);
        }
        s.stroke_arc(c, cfg.node_radius, 0.0, TAU, style.ink);
        let text = if style.show_numbers { n.number.to_string() } else { n.label.clone() };
        let w = s.measure_text(&text);
        s.draw_text(&text, Vec2::new(c.x - w / 2.0, c.y), style.ink);
    }
}

fn draw_shape<S: Surface + ?Sized>(shape: &EdgeShape, color: Color, s: &mut S) {
    match shape {
        EdgeShape::Straight { start, end } => s.stroke_line(*start, *end, color),
        EdgeShape::Curve(q) => s.stroke_quadratic(q.p0, q.c, q.p1, color),
        EdgeShape::Loop(l) => {
            for &(a, b) in l.spans().as_slice() {
                s.stroke_arc(l.center, l.radius, a, b, color);
            }
        }
    }
}
