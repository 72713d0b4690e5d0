use std::f32::consts::TAU;

use super::tolerance::EPS_LEN;
use crate::model::Vec2;

/// Unit vector along `v`, or `None` when `v` has no usable length.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    if len > EPS_LEN && len.is_finite() {
        Some(Vec2 { x: v.x / len, y: v.y / len })
    } else {
        None
    }
}

#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    Vec2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// De Casteljau evaluation of the quadratic through `p0`, `c`, `p1`.
#[inline]
pub fn quadratic_point(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    lerp(lerp(p0, c, t), lerp(c, p1, t), t)
}

/// Perpendicular distance from `p` to the line through `a`,`b` and the
/// unclamped projection parameter along `a -> b`. `None` for a zero-length
/// segment.
pub fn segment_projection(p: Vec2, a: Vec2, b: Vec2) -> Option<(f32, f32)> {
    let v = b - a;
    let vv = v.dot(v);
    if vv <= EPS_LEN * EPS_LEN {
        return None;
    }
    let w = p - a;
    let t = w.dot(v) / vv;
    let dist = v.cross(w).abs() / vv.sqrt();
    Some((dist, t))
}

pub fn point_to_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    match segment_projection(p, a, b) {
        Some((_, t)) => {
            let t = t.clamp(0.0, 1.0);
            p.distance(lerp(a, b, t))
        }
        None => p.distance(a),
    }
}

/// Distance from `p` to the circle of radius `r` around `center`.
#[inline]
pub fn point_to_circle_band_distance(p: Vec2, center: Vec2, r: f32) -> f32 {
    (p.distance(center) - r).abs()
}

/// Polar angle of `v` in `[0, 2π)`, measured in canvas space (y down).
pub fn angle_of(v: Vec2) -> f32 {
    let mut a = v.y.atan2(v.x);
    if a < 0.0 {
        a += TAU;
    }
    if a >= TAU {
        a = 0.0;
    }
    a
}

#[inline]
pub fn angle_in_span(a: f32, start: f32, end: f32) -> bool {
    start <= a && a <= end
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn normalize_rejects_zero_length() {
        assert!(normalize(Vec2::ZERO).is_none());
        let u = normalize(Vec2::new(3.0, 4.0)).unwrap();
        assert!((u.x - 0.6).abs() < 1e-6 && (u.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn quadratic_hits_endpoints_and_midpoint() {
        let p0 = Vec2::new(0.0, 0.0);
        let c = Vec2::new(50.0, 40.0);
        let p1 = Vec2::new(100.0, 0.0);
        assert_eq!(quadratic_point(p0, c, p1, 0.0), p0);
        assert_eq!(quadratic_point(p0, c, p1, 1.0), p1);
        let m = quadratic_point(p0, c, p1, 0.5);
        assert!((m.x - 50.0).abs() < 1e-4 && (m.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn segment_projection_reports_outside_parameters() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let (d, t) = segment_projection(Vec2::new(5.0, 3.0), a, b).unwrap();
        assert!((d - 3.0).abs() < 1e-6 && (t - 0.5).abs() < 1e-6);
        let (_, t) = segment_projection(Vec2::new(-5.0, 0.0), a, b).unwrap();
        assert!(t < 0.0);
        assert!(segment_projection(a, a, a).is_none());
        assert!((point_to_segment_distance(Vec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn angles_wrap_into_positive_turn() {
        assert_eq!(angle_of(Vec2::new(1.0, 0.0)), 0.0);
        assert!((angle_of(Vec2::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-6);
        assert!((angle_of(Vec2::new(0.0, -1.0)) - 1.5 * PI).abs() < 1e-5);
        assert!((angle_of(Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-6);
    }

    #[test]
    fn circle_band_is_symmetric() {
        let c = Vec2::new(0.0, 0.0);
        assert!((point_to_circle_band_distance(Vec2::new(12.0, 0.0), c, 10.0) - 2.0).abs() < 1e-6);
        assert!((point_to_circle_band_distance(Vec2::new(8.0, 0.0), c, 10.0) - 2.0).abs() < 1e-6);
    }
}
