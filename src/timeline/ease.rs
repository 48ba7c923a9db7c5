//! Easing curve for timeline segments.

/// `1 - (1 - u)²`: fast start, gentle settle
///
/// Input is clamped to [0, 1]; exact at both ends and monotone in between.
pub fn power1_out(u: f32) -> f32 {
    let inv = 1.0 - u.clamp(0.0, 1.0);
    1.0 - inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        assert_eq!(power1_out(0.0), 0.0);
        assert_eq!(power1_out(1.0), 1.0);
    }

    #[test]
    fn test_power1_out_monotone() {
        let mut last = 0.0;
        for step in 0..=1000 {
            let v = power1_out(step as f32 / 1000.0);
            assert!(v >= last && v <= 1.0);
            last = v;
        }
        assert_eq!(power1_out(0.5), 0.75);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(power1_out(-0.3), 0.0);
        assert_eq!(power1_out(1.7), 1.0);
    }
}
