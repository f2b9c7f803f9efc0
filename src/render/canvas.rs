use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Surface, TransformStack};
use crate::color::Rgba;
use crate::math::{Affine2, Vec2};

/// Surface backed by a browser 2D canvas context
///
/// The transform stack is mirrored on the Rust side so the scene can read the
/// cumulative transform without a round trip through `getTransform`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    stack: TransformStack,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            stack: TransformStack::new(),
        }
    }
}

fn check(result: Result<(), JsValue>, op: &str) {
    if let Err(e) = result {
        warn!("canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.stack.save();
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.stack.apply(&Affine2::translation(x, y));
        check(self.ctx.translate(x, y), "translate");
    }

    fn rotate(&mut self, angle: f64) {
        self.stack.apply(&Affine2::rotation(angle));
        check(self.ctx.rotate(angle), "rotate");
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.stack.apply(&Affine2::scale(sx, sy));
        check(self.ctx.scale(sx, sy), "scale");
    }

    fn apply_transform(&mut self, m: &Affine2) {
        self.stack.apply(m);
        let [a, b, c, d, e, f] = m.data;
        check(self.ctx.transform(a, b, c, d, e, f), "transform");
    }

    fn set_transform(&mut self, m: &Affine2) {
        self.stack.set(m);
        let [a, b, c, d, e, f] = m.data;
        check(self.ctx.set_transform(a, b, c, d, e, f), "set_transform");
    }

    fn transform(&self) -> Affine2 {
        self.stack.current()
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn quadratic_to(&mut self, control: Vec2, end: Vec2) {
        self.ctx.quadratic_curve_to(control.x, control.y, end.x, end.y);
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }

    fn circle(&mut self, center: Vec2, radius: f64) {
        self.ctx.move_to(center.x + radius, center.y);
        check(
            self.ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU),
            "arc",
        );
    }

    fn stroke(&mut self, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(origin.x, origin.y, width, height);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(&color.to_css());
        check(self.ctx.fill_text(text, at.x, at.y), "fill_text");
    }
}
