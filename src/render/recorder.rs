use super::{Surface, TransformStack};
use crate::color::Rgba;
use crate::math::{Affine2, Vec2};

/// Path segment in device space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo(Vec2, Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Circle { center: Vec2, radius: f64 },
}

impl PathOp {
    /// Final point of the segment
    pub fn end(&self) -> Vec2 {
        match *self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => p,
            PathOp::QuadTo(_, p) => p,
            PathOp::CubicTo(_, _, p) => p,
            PathOp::Circle { center, .. } => center,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `width` is the line width in the local frame, as passed to `stroke`
    Stroke { path: Vec<PathOp>, color: Rgba, width: f64 },
    Fill { path: Vec<PathOp>, color: Rgba },
    FillRect { origin: Vec2, width: f64, height: f64, color: Rgba },
    Text { text: String, at: Vec2, color: Rgba },
}

/// Surface that records every paint operation instead of rasterizing
///
/// Points are stored after the current transform is applied, so tests can
/// reason about where things land on screen.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    stack: TransformStack,
    path: Vec<PathOp>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&[PathOp], Rgba, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { path, color, width } => Some((path.as_slice(), *color, *width)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[PathOp], Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { path, color } => Some((path.as_slice(), *color)),
            _ => None,
        })
    }

    /// Nesting depth of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.path.clear();
    }

    fn device(&self, p: Vec2) -> Vec2 {
        self.stack.current().transform_point(p)
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.stack.apply(&Affine2::translation(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.stack.apply(&Affine2::rotation(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.stack.apply(&Affine2::scale(sx, sy));
    }

    fn apply_transform(&mut self, m: &Affine2) {
        self.stack.apply(m);
    }

    fn set_transform(&mut self, m: &Affine2) {
        self.stack.set(m);
    }

    fn transform(&self) -> Affine2 {
        self.stack.current()
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        let p = self.device(p);
        self.path.push(PathOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        let p = self.device(p);
        self.path.push(PathOp::LineTo(p));
    }

    fn quadratic_to(&mut self, control: Vec2, end: Vec2) {
        let op = PathOp::QuadTo(self.device(control), self.device(end));
        self.path.push(op);
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        let op = PathOp::CubicTo(self.device(c1), self.device(c2), self.device(end));
        self.path.push(op);
    }

    fn circle(&mut self, center: Vec2, radius: f64) {
        let op = PathOp::Circle {
            center: self.device(center),
            radius: radius * self.stack.current().scale_factor(),
        };
        self.path.push(op);
    }

    fn stroke(&mut self, color: Rgba, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color,
            width,
        });
    }

    fn fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            color,
        });
    }

    /// Both corners are mapped to device space; under rotation this records
    /// the bounding span of the two corners, not the rotated quad
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Rgba) {
        let near = self.device(origin);
        let far = self.device(origin + Vec2::new(width, height));
        self.commands.push(DrawCommand::FillRect {
            origin: near,
            width: far.x - near.x,
            height: far.y - near.y,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, _font: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at: self.device(at),
            color,
        });
    }
}
