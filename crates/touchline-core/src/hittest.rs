//! Spatial queries over persisted segments.

use kurbo::Point;

use crate::segment::Segment;

/// Find the first persisted segment close to `point`.
///
/// Each segment is sampled at parameter values `0, step, 2 * step, ...`
/// strictly below `1.0`; the `begin` endpoint is always sampled, the
/// `end` endpoint never is. A sample hits when its Euclidean distance to
/// `point` is strictly less than `tolerance`. Segments are visited in
/// list order and the first hit wins, so earlier-drawn segments shadow
/// later ones where strokes overlap.
///
/// Returns `None` for degenerate parameters (`tolerance` or
/// `sample_step` not positive) and for queries that hit nothing.
pub fn find_nearest(
    segments: &[Segment],
    point: Point,
    tolerance: f64,
    sample_step: f64,
) -> Option<usize> {
    if !(tolerance > 0.0) || !(sample_step > 0.0) {
        return None;
    }
    let samples = (1.0 / sample_step).ceil() as usize;
    for (index, segment) in segments.iter().enumerate() {
        for i in 0..samples {
            let t = i as f64 * sample_step;
            if t >= 1.0 {
                break;
            }
            if segment.eval(t).distance(point) < tolerance {
                return Some(index);
            }
        }
    }
    None
}
