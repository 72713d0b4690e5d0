use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
    #[inline]
    pub fn dot(self, o: Vec2) -> f32 {
        self.x * o.x + self.y * o.y
    }
    #[inline]
    pub fn cross(self, o: Vec2) -> f32 {
        self.x * o.y - self.y * o.x
    }
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
    #[inline]
    pub fn distance(self, o: Vec2) -> f32 {
        (self - o).length()
    }
    /// Counter-clockwise quarter turn in canvas space.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

/// A vertex. `number` and `label` are display identifiers derived from the
/// node's position in the store and rewritten whenever that order changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub number: u32,
    pub label: String,
}

impl Node {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }
}

/// Edge orientation. Entering `Reversed` swaps the stored endpoints, so an
/// arrow always points from `from` to `to` whenever the edge is directed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "false")]
    Undirected,
    #[serde(rename = "directed")]
    Forward,
    #[serde(rename = "reverse")]
    Reversed,
}

impl Direction {
    #[inline]
    pub fn is_directed(self) -> bool {
        !matches!(self, Direction::Undirected)
    }
    pub fn code(self) -> u8 {
        match self {
            Direction::Undirected => 0,
            Direction::Forward => 1,
            Direction::Reversed => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub direction: Direction,
    pub offset: f32,
    pub weight: f32,
}

impl Edge {
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
    /// True when the edge joins `a` and `b` in either orientation.
    #[inline]
    pub fn joins(&self, a: u32, b: u32) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
    #[inline]
    pub fn touches(&self, id: u32) -> bool {
        self.from == id || self.to == id
    }
}

/// Bijective base-26 identifier: 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn node_label(index: usize) -> String {
    let mut out = Vec::new();
    let mut i = index as u64 + 1;
    while i > 0 {
        i -= 1;
        out.push(b'A' + (i % 26) as u8);
        i /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
