//! Side-by-side quadratic and cubic Bezier demonstration
//!
//! Each curve is shown with its control polygon and a marker that travels
//! back and forth along it. Control points can be re-rolled at random.

use rand::Rng;

use crate::color::Rgb;
use crate::math::{CubicBezier, QuadraticBezier, Vec2};
use crate::render::{Surface, Viewport};

const POLYGON: Rgb = Rgb::new(200.0, 200.0, 255.0);
const QUAD_CURVE: Rgb = Rgb::new(120.0, 255.0, 200.0);
const CUBIC_CURVE: Rgb = Rgb::new(120.0, 255.0, 220.0);
const LABEL_FONT: &str = "bold 16px Arial";
const MARKER_RADIUS: f64 = 7.0;

#[derive(Debug, Clone)]
pub struct BezierDemo {
    quad: QuadraticBezier,
    cubic: CubicBezier,
    phase_quad: f64,
    phase_cubic: f64,
    speed_quad: f64,
    speed_cubic: f64,
}

impl Default for BezierDemo {
    fn default() -> Self {
        Self {
            quad: QuadraticBezier::new(
                Vec2::new(-200.0, 100.0),
                Vec2::new(0.0, -150.0),
                Vec2::new(200.0, 100.0),
            ),
            cubic: CubicBezier::new(
                Vec2::new(-220.0, 140.0),
                Vec2::new(-120.0, -180.0),
                Vec2::new(120.0, 180.0),
                Vec2::new(220.0, -140.0),
            ),
            phase_quad: 0.0,
            phase_cubic: 0.0,
            speed_quad: 0.01,
            speed_cubic: 0.008,
        }
    }
}

impl BezierDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quadratic(&self) -> &QuadraticBezier {
        &self.quad
    }

    pub fn cubic(&self) -> &CubicBezier {
        &self.cubic
    }

    /// Re-roll control points within a spread fitted to the viewport, and
    /// restart both markers with new speeds
    pub fn randomize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let spread = viewport.width.min(viewport.height) * 0.35;
        let mut unit = || rng.random::<f64>();

        let q0 = Vec2::new(-spread * 0.8, spread * (0.2 + unit() * 0.4));
        let q2 = Vec2::new(spread * 0.8, spread * (0.2 + unit() * 0.4));
        let q1 = Vec2::new((unit() - 0.5) * spread * 0.4, -spread * (0.2 + unit() * 0.8));
        self.quad = QuadraticBezier::new(q0, q1, q2);

        let p0 = Vec2::new(-spread * 0.9, spread * (0.25 + unit() * 0.2));
        let p3 = Vec2::new(spread * 0.9, -spread * (0.25 + unit() * 0.2));
        let p1 = Vec2::new(-spread * (0.2 + unit() * 0.3), -spread * (0.2 + unit() * 0.8));
        let p2 = Vec2::new(spread * (0.2 + unit() * 0.3), spread * (0.2 + unit() * 0.8));
        self.cubic = CubicBezier::new(p0, p1, p2, p3);

        self.speed_quad = 0.006 + unit() * 0.02;
        self.speed_cubic = 0.005 + unit() * 0.018;
        self.phase_quad = 0.0;
        self.phase_cubic = 0.0;
    }

    /// Curve parameters of the two markers this frame
    pub fn marker_params(&self) -> (f64, f64) {
        (
            (self.phase_quad.sin() + 1.0) / 2.0,
            (self.phase_cubic.cos() + 1.0) / 2.0,
        )
    }

    /// Advance both markers and draw the frame
    pub fn tick(&mut self, surface: &mut dyn Surface, viewport: Viewport) {
        self.phase_quad += self.speed_quad;
        self.phase_cubic += self.speed_cubic;
        let (tq, tc) = self.marker_params();
        let label_y = viewport.height * 0.35;

        surface.clear(viewport, Rgb::BLACK.with_alpha(1.0));
        surface.save();
        let center = viewport.center();
        surface.translate(center.x, center.y);

        surface.save();
        surface.translate(-viewport.width * 0.22, 0.0);
        let q = self.quad;
        draw_polygon(surface, &[q.p0, q.p1, q.p2]);
        surface.begin_path();
        surface.move_to(q.p0);
        surface.quadratic_to(q.p1, q.p2);
        surface.stroke(QUAD_CURVE.with_alpha(0.9), 3.0);
        draw_marker(surface, q.evaluate(tq));
        surface.fill_text("Quadratic", Vec2::new(0.0, label_y), LABEL_FONT, QUAD_CURVE.with_alpha(0.9));
        surface.restore();

        surface.save();
        surface.translate(viewport.width * 0.12, 0.0);
        let c = self.cubic;
        draw_polygon(surface, &[c.p0, c.p1, c.p2, c.p3]);
        surface.begin_path();
        surface.move_to(c.p0);
        surface.cubic_to(c.p1, c.p2, c.p3);
        surface.stroke(CUBIC_CURVE.with_alpha(0.9), 3.0);
        draw_marker(surface, c.evaluate(tc));
        surface.fill_text("Cubic", Vec2::new(0.0, label_y), LABEL_FONT, CUBIC_CURVE.with_alpha(0.9));
        surface.restore();

        surface.restore();
    }
}

fn draw_polygon(surface: &mut dyn Surface, points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.stroke(POLYGON.with_alpha(0.5), 1.4);
}

fn draw_marker(surface: &mut dyn Surface, at: Vec2) {
    surface.begin_path();
    surface.circle(at, MARKER_RADIUS);
    surface.fill(Rgb::WHITE.with_alpha(1.0));
}
