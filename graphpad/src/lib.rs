pub mod config;
pub mod editor;
pub mod error;
pub mod frame;
pub mod model;
pub mod render;
pub mod shape;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod quadratic;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod offsets;
    pub mod picking;
}
mod json;

pub use config::ViewportConfig;
pub use editor::Editor;
pub use error::{ConfigError, LoadError};
pub use frame::FrameScheduler;
pub use model::{Color, Direction, Edge, Node, Vec2};
pub use render::{render, RenderStyle, Surface};
pub use shape::EdgeShape;

use algorithms::offsets;
use geometry::limits::clamp_coord;
use model::node_label;
use serde::{Deserialize, Serialize};

/// Transient interaction state that refers into the store. Cleared whenever
/// the node it points at disappears.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// Node picked as the origin of a pending edge.
    pub selected: Option<u32>,
    pub dragging: Option<u32>,
    /// Pointer position while a pending edge follows the cursor.
    pub temp_edge: Option<Vec2>,
    /// Set by a drag so the click that ends it is swallowed.
    pub just_dragged: bool,
}

pub struct Graph {
    pub(crate) nodes: Vec<Option<Node>>, // id is index
    pub(crate) edges: Vec<Option<Edge>>, // id is index
    pub(crate) selection: Selection,
    pub(crate) base_offset: f32,
    pub(crate) geom_ver: u64,
}

pub struct EdgeArrays {
    pub ids: Vec<u32>,
    pub endpoints: Vec<u32>,
    pub directions: Vec<u8>,
    pub offsets: Vec<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Pick {
    #[serde(rename = "node")]
    Node { id: u32, dist: f32 },
    #[serde(rename = "edge")]
    Edge { id: u32, dist: f32 },
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            selection: Selection::default(),
            base_offset: ViewportConfig::default().base_offset,
            geom_ver: 1,
        }
    }
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }
    pub fn set_base_offset(&mut self, base: f32) {
        if base.is_finite() && base > 0.0 {
            self.base_offset = base;
        }
    }

    // Nodes
    pub fn add_node(&mut self, x: f32, y: f32) -> u32 {
        self.add_node_with(x, y, None, None)
    }
    /// Missing (or zero / empty) identifiers are derived: the number follows
    /// the last node's number, the label is the base-26 code of `number - 1`.
    /// Non-finite coordinates are clamped into the coordinate bounds.
    pub fn add_node_with(&mut self, x: f32, y: f32, number: Option<u32>, label: Option<String>) -> u32 {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("clamping non-finite node position ({}, {})", x, y);
        }
        let (x, y) = (clamp_coord(x), clamp_coord(y));
        let number = number.filter(|n| *n > 0).unwrap_or_else(|| {
            self.nodes.iter().flatten().last().map_or(1, |n| n.number + 1)
        });
        let label = label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| node_label(number as usize - 1));
        let id = self.nodes.len() as u32;
        log::debug!("add node {} ({}) at ({}, {})", id, label, x, y);
        self.nodes.push(Some(Node { x, y, number, label }));
        self.bump();
        id
    }
    pub fn move_node(&mut self, id: u32, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        match self.nodes.get_mut(id as usize) {
            Some(Some(n)) => {
                n.x = x;
                n.y = y;
            }
            _ => return false,
        }
        self.bump();
        true
    }
    pub fn get_node(&self, id: u32) -> Option<&Node> {
        self.nodes.get(id as usize).and_then(|n| n.as_ref())
    }
    /// Live nodes in sequence order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (i as u32, n)))
    }
    pub fn node_ids(&self) -> Vec<u32> {
        self.nodes().map(|(id, _)| id).collect()
    }
    pub fn remove_node(&mut self, id: u32) -> bool {
        match self.nodes.get_mut(id as usize) {
            Some(slot) if slot.is_some() => *slot = None,
            _ => return false,
        }
        // Every edge in a pair touching `id` goes, so no refan is needed.
        let mut dropped = 0usize;
        for slot in self.edges.iter_mut() {
            if slot.as_ref().is_some_and(|e| e.touches(id)) {
                *slot = None;
                dropped += 1;
            }
        }
        if self.selection.selected == Some(id) {
            self.selection.selected = None;
            self.selection.temp_edge = None;
        }
        if self.selection.dragging == Some(id) {
            self.selection.dragging = None;
        }
        self.renumber();
        log::debug!("remove node {} and {} incident edge(s)", id, dropped);
        self.bump();
        true
    }
    pub fn node_count(&self) -> u32 {
        self.nodes.iter().filter(|n| n.is_some()).count() as u32
    }

    /// Rewrite numbers and labels from sequence position.
    fn renumber(&mut self) {
        for (pos, n) in self.nodes.iter_mut().flatten().enumerate() {
            n.number = pos as u32 + 1;
            n.label = node_label(pos);
        }
    }

    // Edges
    pub fn add_edge(&mut self, from: u32, to: u32) -> Option<u32> {
        self.add_edge_with(from, to, None, Direction::Undirected, 0.0)
    }
    /// A missing or zero offset is resolved against the edges already
    /// joining the pair. Clears the pending node selection.
    pub fn add_edge_with(
        &mut self,
        from: u32,
        to: u32,
        offset: Option<f32>,
        direction: Direction,
        weight: f32,
    ) -> Option<u32> {
        self.get_node(from)?;
        self.get_node(to)?;
        let offset = match offset.filter(|o| *o != 0.0 && o.is_finite()) {
            Some(o) => o,
            None => {
                let ids = offsets::edges_between(self, from, to);
                let existing = offsets::from_ends(ids.iter().filter_map(|&i| self.get_edge(i)));
                offsets::next_offset(&existing, from, self.base_offset)
            }
        };
        let id = self.edges.len() as u32;
        self.edges.push(Some(Edge { from, to, direction, offset, weight }));
        self.selection.selected = None;
        log::debug!("add edge {}: {} -> {} offset {}", id, from, to, offset);
        self.bump();
        Some(id)
    }
    pub fn remove_edge(&mut self, id: u32) -> bool {
        let edge = match self.edges.get_mut(id as usize) {
            Some(slot) => match slot.take() {
                Some(e) => e,
                None => return false,
            },
            None => return false,
        };
        offsets::refan_pair(self, edge.from, edge.to);
        log::debug!("remove edge {}: {} -> {}", id, edge.from, edge.to);
        self.bump();
        true
    }
    pub fn get_edge(&self, id: u32) -> Option<&Edge> {
        self.edges.get(id as usize).and_then(|e| e.as_ref())
    }
    pub fn edges(&self) -> impl Iterator<Item = (u32, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (i as u32, e)))
    }
    pub fn edges_between(&self, a: u32, b: u32) -> Vec<u32> {
        offsets::edges_between(self, a, b)
    }
    pub fn edge_count(&self) -> u32 {
        self.edges.iter().filter(|e| e.is_some()).count() as u32
    }

    /// Advance the click cycle undirected -> forward -> reversed -> undirected.
    /// Entering `Reversed` swaps the endpoints and mirrors the offset so the
    /// curve keeps its place on screen.
    pub fn cycle_direction(&mut self, id: u32) -> Option<Direction> {
        let e = self.edges.get_mut(id as usize)?.as_mut()?;
        e.direction = match e.direction {
            Direction::Undirected => Direction::Forward,
            Direction::Forward => {
                std::mem::swap(&mut e.from, &mut e.to);
                e.offset = -e.offset;
                Direction::Reversed
            }
            Direction::Reversed => Direction::Undirected,
        };
        let d = e.direction;
        log::debug!("edge {} now {:?}", id, d);
        self.bump();
        Some(d)
    }
    /// `true` turns every undirected edge forward; `false` makes all edges
    /// undirected. Stored endpoints are left alone.
    pub fn set_all_directed(&mut self, on: bool) {
        for e in self.edges.iter_mut().flatten() {
            if !on {
                e.direction = Direction::Undirected;
            } else if e.direction == Direction::Undirected {
                e.direction = Direction::Forward;
            }
        }
        self.bump();
    }

    pub fn edge_shape(&self, id: u32, cfg: &ViewportConfig) -> Option<EdgeShape> {
        let e = self.get_edge(id)?;
        let a = self.get_node(e.from)?;
        let b = self.get_node(e.to)?;
        Some(EdgeShape::for_edge(e, a.pos(), b.pos(), cfg))
    }

    // Selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn select_node(&mut self, id: u32) -> bool {
        if self.get_node(id).is_none() {
            return false;
        }
        self.selection.selected = Some(id);
        true
    }
    pub fn clear_selected_node(&mut self) {
        self.selection.selected = None;
    }
    pub fn clear_temp_edge(&mut self) {
        self.selection.temp_edge = None;
    }
    pub fn set_temp_edge(&mut self, p: Vec2) {
        self.selection.temp_edge = Some(p);
    }
    pub fn start_drag(&mut self, id: u32) -> bool {
        if self.get_node(id).is_none() {
            return false;
        }
        self.selection.dragging = Some(id);
        true
    }
    pub fn clear_dragging_node(&mut self) {
        self.selection.dragging = None;
    }
    pub fn set_just_dragged(&mut self, v: bool) {
        self.selection.just_dragged = v;
    }

    pub fn get_node_arrays(&self) -> (Vec<u32>, Vec<f32>) {
        let mut ids = Vec::new();
        let mut pos = Vec::new();
        for (i, n) in self.nodes() {
            ids.push(i);
            pos.push(n.x);
            pos.push(n.y);
        }
        (ids, pos)
    }
    pub fn get_edge_arrays(&self) -> EdgeArrays {
        let mut ids = Vec::new();
        let mut ep = Vec::new();
        let mut directions = Vec::new();
        let mut offsets = Vec::new();
        for (i, e) in self.edges() {
            ids.push(i);
            ep.push(e.from);
            ep.push(e.to);
            directions.push(e.direction.code());
            offsets.push(e.offset);
        }
        EdgeArrays { ids, endpoints: ep, directions, offsets }
    }

    // Hit-testing
    pub fn node_at(&self, x: f32, y: f32, cfg: &ViewportConfig) -> Option<u32> {
        algorithms::picking::node_at(self, Vec2::new(x, y), cfg)
    }
    pub fn edge_at(&self, x: f32, y: f32, cfg: &ViewportConfig) -> Option<u32> {
        algorithms::picking::edge_at(self, Vec2::new(x, y), cfg)
    }
    pub fn is_on_edge(&self, id: u32, x: f32, y: f32, cfg: &ViewportConfig) -> bool {
        algorithms::picking::edge_hit(self, id, Vec2::new(x, y), cfg)
    }
    pub fn pick(&self, x: f32, y: f32, cfg: &ViewportConfig) -> Option<Pick> {
        algorithms::picking::pick_impl(self, Vec2::new(x, y), cfg)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_default()
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<(), LoadError> {
        json::from_json_impl(self, v)
    }
    pub fn from_json_str(&mut self, text: &str) -> Result<(), LoadError> {
        json::from_json_str_impl(self, text)
    }

    // Clear
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selection = Selection::default();
        self.bump();
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }
}
