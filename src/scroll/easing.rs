//! Easing curve for programmatic scrolling.

/// Cubic ease-in-out.
///
/// Accelerates from rest up to the midpoint, then decelerates back to rest:
/// `4t³` below one half, `1 - (-2t + 2)³ / 2` from there on.
/// Input is clamped to `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}
