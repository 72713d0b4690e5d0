//! Edge geometry: the one place that turns an edge's endpoints and offset
//! into a drawable path. Rendering and hit-testing both consume
//! [`EdgeShape`], never their own copy of the math.

use std::f32::consts::{FRAC_PI_6, PI, TAU};

use crate::config::ViewportConfig;
use crate::geometry::math::{
    angle_in_span, angle_of, normalize, point_to_circle_band_distance, point_to_segment_distance,
};
use crate::geometry::quadratic::QuadBezier;
use crate::model::{Edge, Vec2};

/// Which side of its node a self-loop hangs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopSide {
    /// `offset >= 0`: loop to the right, gap split across top and bottom.
    Right,
    /// `offset < 0`: loop to the left, one contiguous gap.
    Left,
}

/// Angular intervals (radians, `[0, 2π]`) actually stroked for a loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcSpans {
    Split([(f32, f32); 2]),
    Single([(f32, f32); 1]),
}

impl ArcSpans {
    pub fn as_slice(&self) -> &[(f32, f32)] {
        match self {
            ArcSpans::Split(s) => s,
            ArcSpans::Single(s) => s,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopArc {
    pub center: Vec2,
    pub radius: f32,
    /// Half of the angular gap where the loop re-enters its node.
    pub half_gap: f32,
    pub side: LoopSide,
}

impl LoopArc {
    pub fn loop_radius(offset: f32, node_radius: f32) -> f32 {
        if offset == 0.0 {
            node_radius * 1.5
        } else {
            node_radius + (offset / 2.0).abs()
        }
    }

    pub fn new(node: Vec2, offset: f32, node_radius: f32) -> Self {
        let radius = Self::loop_radius(offset, node_radius);
        let side = if offset >= 0.0 { LoopSide::Right } else { LoopSide::Left };
        let dir = match side {
            LoopSide::Right => 1.0,
            LoopSide::Left => -1.0,
        };
        let half_gap = (node_radius / radius).clamp(-1.0, 1.0).asin();
        LoopArc {
            center: Vec2::new(node.x + radius * dir, node.y),
            radius,
            half_gap,
            side,
        }
    }

    pub fn gap_angle(&self) -> f32 {
        2.0 * self.half_gap
    }

    pub fn spans(&self) -> ArcSpans {
        let th = self.half_gap;
        match self.side {
            LoopSide::Right => ArcSpans::Split([(0.0, PI - th), (PI + th, TAU)]),
            LoopSide::Left => ArcSpans::Single([(th, TAU - th)]),
        }
    }

    pub fn contains_angle(&self, a: f32) -> bool {
        self.spans()
            .as_slice()
            .iter()
            .any(|&(s, e)| angle_in_span(a, s, e))
    }

    pub fn point_at(&self, angle: f32) -> Vec2 {
        Vec2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Angle of the point farthest from the node; the loop's arrow sits there.
    pub fn apex_angle(&self) -> f32 {
        match self.side {
            LoopSide::Right => 0.0,
            LoopSide::Left => PI,
        }
    }

    /// Apex point, `2 × radius` from the node center.
    pub fn apex(&self) -> Vec2 {
        let dir = match self.side {
            LoopSide::Right => 1.0,
            LoopSide::Left => -1.0,
        };
        Vec2::new(self.center.x + self.radius * dir, self.center.y)
    }

    /// Unit tangent at the apex in the stroke's (increasing-angle) direction.
    pub fn apex_tangent(&self) -> Vec2 {
        let a = self.apex_angle();
        Vec2::new(-a.sin(), a.cos())
    }

    fn distance_to(&self, p: Vec2) -> f32 {
        let a = angle_of(p - self.center);
        if self.contains_angle(a) {
            return point_to_circle_band_distance(p, self.center, self.radius);
        }
        self.spans()
            .as_slice()
            .iter()
            .flat_map(|&(s, e)| [self.point_at(s), self.point_at(e)])
            .map(|q| p.distance(q))
            .fold(f32::INFINITY, f32::min)
    }
}

/// A filled arrow triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
    pub tip: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeShape {
    Straight { start: Vec2, end: Vec2 },
    Curve(QuadBezier),
    Loop(LoopArc),
}

impl EdgeShape {
    /// Shape of a stored edge whose endpoint nodes sit at `from` and `to`.
    pub fn for_edge(edge: &Edge, from: Vec2, to: Vec2, cfg: &ViewportConfig) -> Self {
        if edge.is_loop() {
            EdgeShape::Loop(LoopArc::new(from, edge.offset, cfg.node_radius))
        } else {
            Self::between(from, to, edge.offset, cfg)
        }
    }

    /// Connection between two distinct node centers. Ends are pulled in to
    /// the node boundary unless the nodes touch or overlap, in which case the
    /// center segment is kept. Coincident centers stay unshifted and straight.
    pub fn between(a: Vec2, b: Vec2, offset: f32, cfg: &ViewportConfig) -> Self {
        let Some(u) = normalize(b - a) else {
            return EdgeShape::Straight { start: a, end: b };
        };
        let pull = if a.distance(b) > 2.0 * cfg.node_radius { cfg.node_radius } else { 0.0 };
        let start = a + u * pull;
        let end = b - u * pull;
        if offset == 0.0 {
            return EdgeShape::Straight { start, end };
        }
        let mid = (a + b) * 0.5;
        let control = mid + u.perp() * offset;
        EdgeShape::Curve(QuadBezier::new(start, control, end))
    }

    /// Point the arrowhead is anchored to: `t = 0.5` or the loop apex.
    pub fn midpoint(&self) -> Vec2 {
        match self {
            EdgeShape::Straight { start, end } => (*start + *end) * 0.5,
            EdgeShape::Curve(q) => q.eval(0.5),
            EdgeShape::Loop(l) => l.apex(),
        }
    }

    pub fn arrowhead(&self, cfg: &ViewportConfig) -> Option<Arrowhead> {
        match self {
            EdgeShape::Straight { start, end } => chord_arrow(self.midpoint(), *end - *start, cfg.arrow_size),
            EdgeShape::Curve(q) => chord_arrow(self.midpoint(), q.tangent(0.5), cfg.arrow_size),
            EdgeShape::Loop(l) => {
                // Equilateral triangle centered on the apex.
                let r = cfg.loop_arrow_size / 3.0;
                let d = l.apex_tangent();
                let n = d.perp();
                let apex = l.apex();
                let back = apex - d * r;
                Some(Arrowhead {
                    tip: apex + d * (2.0 * r),
                    left: back + n * (r * 3f32.sqrt()),
                    right: back - n * (r * 3f32.sqrt()),
                })
            }
        }
    }

    /// Distance from `p` to the drawn stroke.
    pub fn distance_to(&self, p: Vec2, samples: u32) -> f32 {
        match self {
            EdgeShape::Straight { start, end } => point_to_segment_distance(p, *start, *end),
            EdgeShape::Curve(q) => q.sampled_distance(p, samples).0,
            EdgeShape::Loop(l) => l.distance_to(p),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        match self {
            EdgeShape::Straight { start, end } => normalize(*end - *start).is_none(),
            EdgeShape::Curve(_) | EdgeShape::Loop(_) => false,
        }
    }
}

/// Tip at `mid`, base points spread ±30° behind it along `dir`.
fn chord_arrow(mid: Vec2, dir: Vec2, size: f32) -> Option<Arrowhead> {
    let u = normalize(dir)?;
    let back = (-u.y).atan2(-u.x);
    let at = |a: f32| Vec2::new(mid.x + size * a.cos(), mid.y + size * a.sin());
    Some(Arrowhead {
        tip: mid,
        left: at(back - FRAC_PI_6),
        right: at(back + FRAC_PI_6),
    })
}
