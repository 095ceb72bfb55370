//! Bezier flattening.
//!
//! Control polygons of any degree are supported. Each sample is evaluated by
//! the recursive de Casteljau construction, which costs O(n²) in the number
//! of control points per sample; UI curves have a handful of points, so
//! there is no cubic-only fast path.

use brushwork_engine::coords::Vec2;

/// Resolution used by [`Graphics::draw_curve`](crate::Graphics::draw_curve).
pub const DEFAULT_SEGMENTS: usize = 32;

/// Samples the Bezier curve defined by `points` at `segments + 1` evenly
/// spaced parameters, endpoints included.
///
/// Returns an empty polyline for fewer than two control points. A segment
/// count of zero is treated as one.
pub fn flatten(points: &[Vec2], segments: usize) -> Vec<Vec2> {
    if points.len() <= 1 {
        return Vec::new();
    }
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| bezier_point(i as f32 / segments as f32, points))
        .collect()
}

/// Point at parameter `t`: the interpolation between the curves of the
/// first `n - 1` and last `n - 1` control points.
fn bezier_point(t: f32, points: &[Vec2]) -> Vec2 {
    match points {
        [] => Vec2::zero(),
        [p] => *p,
        _ => {
            let head = bezier_point(t, &points[..points.len() - 1]);
            let tail = bezier_point(t, &points[1..]);
            head.lerp(tail, t)
        }
    }
}
