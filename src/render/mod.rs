//! Immediate-mode 2D drawing surface
//!
//! The scene never keeps geometry around: every frame it issues path, style
//! and transform commands against a [`Surface`]. The browser host backs it
//! with a canvas context; tests back it with a [`RecordingSurface`].

mod canvas;
mod recorder;

pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, PathOp, RecordingSurface};

use crate::color::Rgba;
use crate::math::{Affine2, Vec2};

/// Size of the drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Abstract 2D drawing target with a canvas-style transform stack
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    /// Multiply the current transform by `m`
    fn apply_transform(&mut self, m: &Affine2);
    /// Replace the current transform
    fn set_transform(&mut self, m: &Affine2);
    /// Current cumulative transform (local -> device)
    fn transform(&self) -> Affine2;

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn quadratic_to(&mut self, control: Vec2, end: Vec2);
    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
    /// Full circle as a closed subpath
    fn circle(&mut self, center: Vec2, radius: f64);

    fn stroke(&mut self, color: Rgba, width: f64);
    fn fill(&mut self, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Rgba);
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba);

    /// Reset transform and paint the whole viewport
    fn clear(&mut self, viewport: Viewport, color: Rgba) {
        self.set_transform(&Affine2::identity());
        self.fill_rect(Vec2::ZERO, viewport.width, viewport.height, color);
    }
}

/// Save/restore stack of transforms shared by surface implementations
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Affine2 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored, as on a canvas
    pub fn restore(&mut self) {
        if let Some(m) = self.saved.pop() {
            self.current = m;
        }
    }

    pub fn apply(&mut self, m: &Affine2) {
        self.current = self.current.multiply(m);
    }

    pub fn set(&mut self, m: &Affine2) {
        self.current = *m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_save_restore() {
        let mut stack = TransformStack::new();
        stack.save();
        stack.apply(&Affine2::translation(5.0, 0.0));
        assert_eq!(stack.current().origin(), Vec2::new(5.0, 0.0));
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert_eq!(stack.current(), Affine2::identity());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut stack = TransformStack::new();
        stack.apply(&Affine2::translation(1.0, 2.0));
        stack.restore();
        assert_eq!(stack.current().origin(), Vec2::new(1.0, 2.0));
    }
}
