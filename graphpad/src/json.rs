use std::collections::HashMap;

use crate::error::LoadError;
use crate::geometry::limits;
use crate::model::{Direction, Node};
use crate::Graph;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct NodeSer<'a> {
    number: u32,
    label: &'a str,
    x: f32,
    y: f32,
}

impl<'a> From<&'a Node> for NodeSer<'a> {
    fn from(n: &'a Node) -> Self {
        NodeSer { number: n.number, label: &n.label, x: n.x, y: n.y }
    }
}

pub fn to_json_impl(g: &Graph) -> Value {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct EdgeSer<'a> {
        from_node: NodeSer<'a>,
        to_node: NodeSer<'a>,
        is_directed: Direction,
        offset: f32,
        weight: f32,
    }
    #[derive(Serialize)]
    struct Doc<'a> {
        nodes: Vec<NodeSer<'a>>,
        edges: Vec<EdgeSer<'a>>,
    }
    let nodes: Vec<NodeSer> = g.nodes.iter().flatten().map(NodeSer::from).collect();
    let mut edges = Vec::new();
    for e in g.edges.iter().flatten() {
        // Edges never outlive their endpoints, so both lookups succeed.
        let (Some(a), Some(b)) = (g.get_node(e.from), g.get_node(e.to)) else {
            continue;
        };
        edges.push(EdgeSer {
            from_node: a.into(),
            to_node: b.into(),
            is_directed: e.direction,
            offset: e.offset,
            weight: e.weight,
        });
    }
    serde_json::to_value(Doc { nodes, edges }).unwrap_or(Value::Null)
}

#[derive(Deserialize)]
struct NodeDe {
    number: Option<u32>,
    label: Option<String>,
    x: f32,
    y: f32,
}

#[derive(Deserialize)]
struct NodeRefDe {
    number: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDe {
    from_node: NodeRefDe,
    to_node: NodeRefDe,
    #[serde(default)]
    is_directed: Direction,
    #[serde(default)]
    offset: f32,
    #[serde(default)]
    weight: f32,
}

#[derive(Deserialize)]
struct DocDe {
    nodes: Vec<NodeDe>,
    edges: Vec<EdgeDe>,
}

pub fn from_json_str_impl(g: &mut Graph, text: &str) -> Result<(), LoadError> {
    let v: Value = serde_json::from_str(text).map_err(|e| LoadError::Malformed(e.to_string()))?;
    from_json_impl(g, v)
}

/// Validate the whole document before touching `g`; on success replace the
/// graph with its contents.
pub fn from_json_impl(g: &mut Graph, v: Value) -> Result<(), LoadError> {
    for key in ["nodes", "edges"] {
        match v.get(key) {
            None | Some(Value::Null) => return Err(LoadError::Incomplete(key)),
            Some(_) => {}
        }
    }
    let doc: DocDe = serde_json::from_value(v).map_err(|e| LoadError::Malformed(e.to_string()))?;
    validate(&doc)?;

    g.clear();
    let mut by_number: HashMap<u32, u32> = HashMap::with_capacity(doc.nodes.len());
    for n in doc.nodes {
        let id = g.add_node_with(n.x, n.y, n.number, n.label);
        if let Some(node) = g.get_node(id) {
            by_number.entry(node.number).or_insert(id);
        }
    }
    let mut skipped = 0usize;
    for e in doc.edges {
        let (Some(&a), Some(&b)) = (by_number.get(&e.from_node.number), by_number.get(&e.to_node.number)) else {
            skipped += 1;
            continue;
        };
        g.add_edge_with(a, b, Some(e.offset), e.is_directed, e.weight);
    }
    if skipped > 0 {
        log::warn!("skipped {} edge(s) referencing missing nodes", skipped);
    }
    log::info!("loaded graph: {} nodes, {} edges", g.node_count(), g.edge_count());
    Ok(())
}

fn validate(doc: &DocDe) -> Result<(), LoadError> {
    if doc.nodes.len() > limits::MAX_NODES {
        return Err(LoadError::Limit { what: "nodes", max: limits::MAX_NODES });
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(LoadError::Limit { what: "edges", max: limits::MAX_EDGES });
    }
    for n in &doc.nodes {
        if !limits::in_coord_bounds(n.x) {
            return Err(LoadError::InvalidNumber { field: "x" });
        }
        if !limits::in_coord_bounds(n.y) {
            return Err(LoadError::InvalidNumber { field: "y" });
        }
        if n.label.as_ref().is_some_and(|l| l.chars().count() > limits::MAX_LABEL_LEN) {
            return Err(LoadError::Limit { what: "label characters", max: limits::MAX_LABEL_LEN });
        }
    }
    for e in &doc.edges {
        if !limits::in_coord_bounds(e.offset) {
            return Err(LoadError::InvalidNumber { field: "offset" });
        }
        if !e.weight.is_finite() {
            return Err(LoadError::InvalidNumber { field: "weight" });
        }
    }
    Ok(())
}
