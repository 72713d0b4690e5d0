use crate::config::ViewportConfig;
use crate::geometry::math::{angle_of, point_to_circle_band_distance, segment_projection};
use crate::model::Vec2;
use crate::shape::EdgeShape;
use crate::{Graph, Pick};

/// First node (store order) whose center lies strictly inside the node radius.
pub fn node_at(g: &Graph, p: Vec2, cfg: &ViewportConfig) -> Option<u32> {
    g.nodes.iter().enumerate().find_map(|(i, n)| match n {
        Some(n) if n.pos().distance(p) < cfg.node_radius => Some(i as u32),
        _ => None,
    })
}

/// Whether `p` lies on the drawn stroke of `shape` within `threshold` pixels.
pub fn shape_hit(shape: &EdgeShape, p: Vec2, threshold: f32, samples: u32) -> bool {
    match shape {
        EdgeShape::Loop(l) => {
            if point_to_circle_band_distance(p, l.center, l.radius) > threshold {
                return false;
            }
            l.contains_angle(angle_of(p - l.center))
        }
        EdgeShape::Straight { start, end } => match segment_projection(p, *start, *end) {
            // Both dot-product tests: the projection lands between the ends.
            Some((dist, t)) => dist < threshold && (0.0..=1.0).contains(&t),
            None => false,
        },
        EdgeShape::Curve(q) => q.sampled_distance(p, samples).0 < threshold,
    }
}

pub fn edge_hit(g: &Graph, id: u32, p: Vec2, cfg: &ViewportConfig) -> bool {
    match g.edge_shape(id, cfg) {
        Some(shape) => shape_hit(&shape, p, cfg.hit_threshold, cfg.curve_samples),
        None => false,
    }
}

/// First edge (store order) under `p`.
pub fn edge_at(g: &Graph, p: Vec2, cfg: &ViewportConfig) -> Option<u32> {
    (0..g.edges.len() as u32).find(|&id| edge_hit(g, id, p, cfg))
}

/// Nodes take precedence over edges, matching how clicks are resolved.
pub fn pick_impl(g: &Graph, p: Vec2, cfg: &ViewportConfig) -> Option<Pick> {
    if let Some(id) = node_at(g, p, cfg) {
        let dist = g.get_node(id).map_or(0.0, |n| n.pos().distance(p));
        return Some(Pick::Node { id, dist });
    }
    let id = edge_at(g, p, cfg)?;
    let dist = g
        .edge_shape(id, cfg)
        .map_or(0.0, |s| s.distance_to(p, cfg.curve_samples));
    Some(Pick::Edge { id, dist })
}
