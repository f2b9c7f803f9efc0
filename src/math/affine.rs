use super::Vec2;

/// 2D affine transform in canvas layout `[a, b, c, d, e, f]`
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`, the same convention as
/// `CanvasRenderingContext2d::set_transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub data: [f64; 6],
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    pub fn identity() -> Self {
        Self {
            data: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            data: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            data: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Clockwise on screen for positive angles, like `ctx.rotate`
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            data: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// `self * other`: `other` is applied to points first.
    ///
    /// Appending a local transform to the current one is `current.multiply(&local)`,
    /// which is what `ctx.translate`/`ctx.rotate`/`ctx.scale` do.
    pub fn multiply(&self, other: &Affine2) -> Affine2 {
        let [a1, b1, c1, d1, e1, f1] = self.data;
        let [a2, b2, c2, d2, e2, f2] = other.data;
        Affine2 {
            data: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.data;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Where the local origin lands in device space
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.data[4], self.data[5])
    }

    /// Inverse transform, or `None` when the matrix is singular
    pub fn inverse(&self) -> Option<Affine2> {
        let [a, b, c, d, e, f] = self.data;
        let det = a * d - b * c;
        if det.abs() < 1e-12 {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine2 {
            data: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * f - d * e) * inv,
                (b * e - a * f) * inv,
            ],
        })
    }

    /// Uniform scale factor, assuming no shear
    pub fn scale_factor(&self) -> f64 {
        let [a, b, ..] = self.data;
        (a * a + b * b).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_identity() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Affine2::identity().transform_point(p), p);
    }

    #[test]
    fn test_translation_then_rotation() {
        // ctx.translate(10, 0); ctx.rotate(90deg); point (1, 0) lands at (10, 1)
        let m = Affine2::translation(10.0, 0.0).multiply(&Affine2::rotation(FRAC_PI_2));
        assert!(approx(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 1.0)));
        assert!(approx(m.origin(), Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_scale_about_center() {
        let m = Affine2::translation(50.0, 50.0)
            .multiply(&Affine2::scale(2.0, 2.0))
            .multiply(&Affine2::translation(-50.0, -50.0));
        assert!(approx(m.transform_point(Vec2::new(50.0, 50.0)), Vec2::new(50.0, 50.0)));
        assert!(approx(m.transform_point(Vec2::new(60.0, 50.0)), Vec2::new(70.0, 50.0)));
        assert!((m.scale_factor() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Affine2::translation(400.0, 300.0)
            .multiply(&Affine2::scale(1.35, 1.35))
            .multiply(&Affine2::rotation(0.4))
            .multiply(&Affine2::translation(-400.0, -150.0));
        let p = Vec2::new(12.0, -80.0);
        let back = m.inverse().unwrap().transform_point(m.transform_point(p));
        assert!(approx(back, p));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Affine2::scale(0.0, 1.0).inverse().is_none());
    }
}
