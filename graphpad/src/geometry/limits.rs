// Caps checked before a saved graph replaces the current one

// Scene size caps
pub const MAX_NODES: usize = 50_000;
pub const MAX_EDGES: usize = 200_000;

// Node labels, in characters
pub const MAX_LABEL_LEN: usize = 64;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

/// Pull a coordinate into bounds; NaN lands on the origin.
#[inline]
pub fn clamp_coord(x: f32) -> f32 { if x.is_nan() { 0.0 } else { x.clamp(COORD_MIN, COORD_MAX) } }
