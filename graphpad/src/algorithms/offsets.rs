//! Fan-out of parallel edges between one node pair.
//!
//! Every edge between the same unordered pair gets a lateral offset so the
//! curves alternate sides and step outward: 0, ±b, ∓b, ±2b, ... The sign
//! additionally depends on whether the newest edge already in the pair runs
//! the same way as the one being placed.

use crate::model::Edge;
use crate::Graph;

/// Offset for a new edge leaving `from`, given the `from` endpoints of the
/// edges already joining the pair, oldest first.
pub fn next_offset(existing_from: &[u32], from: u32, base: f32) -> f32 {
    let count = existing_from.len();
    let Some(&last_from) = existing_from.last() else {
        return 0.0;
    };
    let parity = if count % 2 == 0 { 1.0 } else { -1.0 };
    let mut offset = base * parity * count.div_ceil(2) as f32;
    let same_direction = last_from == from;
    if !same_direction && offset < 0.0 {
        offset = -offset;
    }
    if same_direction {
        offset = -offset;
    }
    offset
}

/// Ids of live edges joining `a` and `b` in either orientation, in store order.
pub fn edges_between(g: &Graph, a: u32, b: u32) -> Vec<u32> {
    g.edges
        .iter()
        .enumerate()
        .filter_map(|(i, e)| match e {
            Some(e) if e.joins(a, b) => Some(i as u32),
            _ => None,
        })
        .collect()
}

/// Recompute the offsets of every surviving edge between `a` and `b` as if
/// they had been added one by one in their current order.
pub fn refan_pair(g: &mut Graph, a: u32, b: u32) {
    let ids = edges_between(g, a, b);
    let base = g.base_offset;
    let mut placed: Vec<u32> = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(Some(edge)) = g.edges.get_mut(id as usize) {
            edge.offset = next_offset(&placed, edge.from, base);
            placed.push(edge.from);
        }
    }
}

/// `from` endpoints of `edges`, for feeding [`next_offset`].
pub fn from_ends<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Vec<u32> {
    edges.into_iter().map(|e| e.from).collect()
}
