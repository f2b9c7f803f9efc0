pub mod vec2;
pub mod affine;
pub mod bezier;

pub use vec2::Vec2;
pub use affine::Affine2;
pub use bezier::{CubicBezier, QuadraticBezier, cubic, quadratic};

/// Linear map of `v` from `[a, b]` onto `[c, d]`
pub fn map_range(v: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        return c;
    }
    c + (v - a) * (d - c) / (b - a)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert!((map_range(0.06, 0.0, 0.12, 2.0, 6.0) - 4.0).abs() < 1e-12);
        assert!((map_range(9.0, 0.0, 9.0, 14.0, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_map_range_degenerate_domain() {
        assert_eq!(map_range(5.0, 1.0, 1.0, 2.0, 3.0), 2.0);
    }
}
