use glam::Vec2;

/// Rotates a vector by a right angle in the counter-clockwise direction.
pub fn perpendicular_ccw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Normalizes `v`, falling back to `fallback` when the input is too short
/// to carry a direction.
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(fallback)
}

pub fn cubic_bezier_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let one_minus = 1.0 - t;
    let a = one_minus * one_minus * one_minus;
    let b = 3.0 * one_minus * one_minus * t;
    let c = 3.0 * one_minus * t * t;
    let d = t * t * t;
    a * p0 + b * p1 + c * p2 + d * p3
}
