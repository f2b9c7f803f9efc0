use super::Vec2;

/// Quadratic Bezier curve through three control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl QuadraticBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn evaluate(&self, t: f64) -> Vec2 {
        quadratic(self.p0, self.p1, self.p2, t)
    }

    /// Sample curve at N evenly spaced parameters
    pub fn sample(&self, n: usize) -> Vec<Vec2> {
        sample_with(n, |t| self.evaluate(t))
    }
}

/// Cubic Bezier curve through four control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn evaluate(&self, t: f64) -> Vec2 {
        cubic(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn sample(&self, n: usize) -> Vec<Vec2> {
        sample_with(n, |t| self.evaluate(t))
    }
}

/// Evaluate a quadratic Bezier in Bernstein form
pub fn quadratic(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    p0.scale(u * u) + p1.scale(2.0 * u * t) + p2.scale(t * t)
}

/// Evaluate a cubic Bezier in Bernstein form
pub fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;

    p0.scale(uu * u) + p1.scale(3.0 * uu * t) + p2.scale(3.0 * u * tt) + p3.scale(tt * t)
}

fn sample_with(n: usize, f: impl Fn(f64) -> Vec2) -> Vec<Vec2> {
    (0..n)
        .map(|i| f(i as f64 / (n - 1).max(1) as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_quadratic_endpoints() {
        let curve = QuadraticBezier::new(
            Vec2::new(-200.0, 100.0),
            Vec2::new(0.0, -150.0),
            Vec2::new(200.0, 100.0),
        );
        assert!(close(curve.evaluate(0.0), curve.p0));
        assert!(close(curve.evaluate(1.0), curve.p2));
    }

    #[test]
    fn test_cubic_endpoints() {
        let curve = CubicBezier::new(
            Vec2::new(-220.0, 140.0),
            Vec2::new(-120.0, -180.0),
            Vec2::new(120.0, 180.0),
            Vec2::new(220.0, -140.0),
        );
        assert!(close(curve.evaluate(0.0), curve.p0));
        assert!(close(curve.evaluate(1.0), curve.p3));
    }

    #[test]
    fn test_quadratic_midpoint() {
        // B(0.5) = 0.25*p0 + 0.5*p1 + 0.25*p2
        let p = quadratic(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0), 0.5);
        assert!(close(p, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_cubic_collinear_points_stay_on_line() {
        let p0 = Vec2::new(0.0, 0.0);
        let p3 = Vec2::new(3.0, 3.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = cubic(p0, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), p3, t);
            assert!((p.x - p.y).abs() < 1e-9);
            assert!((p.x - 3.0 * t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sampling() {
        let curve = CubicBezier::new(Vec2::ZERO, Vec2::new(0.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 0.0));
        let samples = curve.sample(11);
        assert_eq!(samples.len(), 11);
        assert!(close(samples[10], curve.p3));
    }
}
