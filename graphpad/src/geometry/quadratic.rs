//! Quadratic Bézier curve used for bent (offset) edges.
//!
//! The same curve value is handed to the renderer and to hit-testing, so a
//! stroke on screen and the region that reacts to the pointer never drift
//! apart.

use super::math::{lerp, quadratic_point};
use crate::model::Vec2;

/// Control points of a quadratic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub p0: Vec2, // Start point
    pub c: Vec2,  // Control point
    pub p1: Vec2, // End point
}

impl QuadBezier {
    pub fn new(p0: Vec2, c: Vec2, p1: Vec2) -> Self {
        Self { p0, c, p1 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        quadratic_point(self.p0, self.c, self.p1, t)
    }

    /// Derivative at parameter t. At t = 0.5 this is parallel to `p1 - p0`.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let a = lerp(self.p0, self.c, t);
        let b = lerp(self.c, self.p1, t);
        (b - a) * 2.0
    }

    /// Smallest distance from `p` to the curve over `samples + 1` evenly
    /// spaced parameters, together with the parameter that achieved it.
    pub fn sampled_distance(&self, p: Vec2, samples: u32) -> (f32, f32) {
        let n = samples.max(1);
        let mut best_d = f32::INFINITY;
        let mut best_t = 0.0;
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let d = p.distance(self.eval(t));
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }
        (best_d, best_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_distance_is_zero_on_sample_points() {
        let q = QuadBezier::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 60.0), Vec2::new(100.0, 0.0));
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let (d, _) = q.sampled_distance(q.eval(t), 100);
            assert!(d < 1e-3, "t={} d={}", t, d);
        }
    }

    #[test]
    fn tangent_at_midpoint_follows_chord() {
        let q = QuadBezier::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 80.0), Vec2::new(100.0, 20.0));
        let tan = q.tangent(0.5);
        let chord = q.p1 - q.p0;
        assert!(tan.cross(chord).abs() < 1e-3);
        assert!(tan.dot(chord) > 0.0);
    }
}
