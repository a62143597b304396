// Math utilities and helper functions

use glam::DVec2;

/// Slope between two points, with the operand order normalized so the point
/// with the larger x is always treated as the second point. This keeps the
/// sign independent of argument order.
///
/// Vertically aligned points (equal x) yield signed infinity from IEEE
/// division; the corner-case collision resolver relies on those values
/// ordering consistently under `>=`/`<=`.
pub fn slope(a: DVec2, b: DVec2) -> f64 {
    let (lo, hi) = if a.x <= b.x { (a, b) } else { (b, a) };
    (hi.y - lo.y) / (hi.x - lo.x)
}
