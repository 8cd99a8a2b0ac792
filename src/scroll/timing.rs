//! Time helpers for scroll animations. All times are milliseconds as reported
//! by the host clock.

/// Animation progress in `[0, 1]` after `elapsed` ms of a `duration` ms animation.
#[inline]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(200.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-5.0, 1000.0), 0.0);
        assert_eq!(progress(250.0, 1000.0), 0.25);
        assert_eq!(progress(4000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(0.0, 0.0), 1.0);
    }
}
