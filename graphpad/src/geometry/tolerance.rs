// Shared tolerances for the geometry kernel

pub const EPS_LEN: f32 = 1e-6; // zero-length vector threshold

#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
