//! Static leaves at the branch tips, and the hook that lets some of them fall

use std::f64::consts::PI;

use rand::Rng;

use crate::color::{Rgb, Rgba};
use crate::config::ColorConfig;
use crate::math::{Affine2, Vec2};
use crate::particles::{FallingLeaf, FallingLeafSystem};
use crate::render::Surface;

const LEAF_BASE_SIZE: f64 = 22.0;
/// Leaf half-width relative to its length
const LEAF_WIDTH_RATIO: f64 = 0.55;
/// Constant lean of attached leaves
const LEAF_TILT: f64 = -PI / 20.0;

/// Called for every static leaf drawn in a frame
pub trait LeafVisitor {
    /// `position` is the leaf origin in device space
    fn on_leaf_visited(&mut self, position: Vec2, appear: f64, depth: u32);
}

/// Visitor that ignores leaves
impl LeafVisitor for () {
    fn on_leaf_visited(&mut self, _position: Vec2, _appear: f64, _depth: u32) {}
}

/// Length of a leaf grown at the given depth
pub fn leaf_size(depth: u32, max_depth: u32) -> f64 {
    let depth_ratio = depth as f64 / max_depth.max(1) as f64;
    LEAF_BASE_SIZE * (0.8 + 0.4 * depth_ratio)
}

/// Trace a closed two-lobe leaf from the origin up to `(0, -size)`.
///
/// `shoulder` is how far along the leaf the widest point sits.
pub fn trace_leaf_outline(surface: &mut dyn Surface, size: f64, half_width: f64, shoulder: f64) {
    surface.begin_path();
    surface.move_to(Vec2::ZERO);
    surface.cubic_to(
        Vec2::new(half_width, -size * shoulder),
        Vec2::new(half_width * 0.9, -size * 0.9),
        Vec2::new(0.0, -size),
    );
    surface.cubic_to(
        Vec2::new(-half_width * 0.9, -size * 0.9),
        Vec2::new(-half_width, -size * shoulder),
        Vec2::ZERO,
    );
}

/// Stroke the center vein of a leaf
pub fn stroke_midrib(surface: &mut dyn Surface, size: f64, color: Rgba) {
    surface.begin_path();
    surface.move_to(Vec2::ZERO);
    surface.line_to(Vec2::new(0.0, -size));
    surface.stroke(color, 0.7);
}

/// Draws the leaf attached at a branch tip
#[derive(Debug, Clone)]
pub struct LeafEmitter {
    max_depth: u32,
    fill: Rgb,
    edge: Rgb,
}

impl LeafEmitter {
    pub fn new(max_depth: u32, colors: &ColorConfig) -> Self {
        Self {
            max_depth: max_depth.max(1),
            fill: colors.leaf_green,
            edge: colors.leaf_edge,
        }
    }

    /// Draw a fluttering leaf at the current origin and report it to `visitor`
    pub fn emit(
        &self,
        surface: &mut dyn Surface,
        visitor: &mut dyn LeafVisitor,
        time: f64,
        appear: f64,
        depth: u32,
    ) {
        let size = leaf_size(depth, self.max_depth);
        let half_width = size * LEAF_WIDTH_RATIO;

        let swing = (time * 1.2 + depth as f64 * 0.4).sin() * (PI / 45.0);
        let offset_x = (time * 0.7 + depth as f64 * 0.8).sin() * 5.0;

        surface.save();
        surface.translate(offset_x * appear, 0.0);
        surface.rotate(swing * appear);
        surface.rotate(LEAF_TILT);

        trace_leaf_outline(surface, size, half_width, 0.20);
        surface.fill(self.fill.with_alpha(0.85 * appear));
        surface.stroke(self.edge.with_alpha(0.9 * appear), 1.0);
        stroke_midrib(surface, size, Rgb::WHITE.with_alpha(0.22 * appear));

        visitor.on_leaf_visited(surface.transform().origin(), appear, depth);

        surface.restore();
    }
}

/// Detaches leaves into the falling-leaf system once the tree is grown
pub struct LeafSpawner<'a, R: Rng> {
    leaves: &'a mut FallingLeafSystem,
    rng: &'a mut R,
    growth: f64,
    max_depth: u32,
    /// Maps device positions back to scene space (undoes the camera)
    scene_from_device: Affine2,
    spawned: usize,
}

impl<'a, R: Rng> LeafSpawner<'a, R> {
    pub fn new(
        leaves: &'a mut FallingLeafSystem,
        rng: &'a mut R,
        growth: f64,
        max_depth: u32,
        camera: Affine2,
    ) -> Self {
        Self {
            leaves,
            rng,
            growth,
            max_depth,
            scene_from_device: camera.inverse().unwrap_or_default(),
            spawned: 0,
        }
    }

    /// Leaves detached through this spawner so far
    pub fn spawned(&self) -> usize {
        self.spawned
    }
}

impl<R: Rng> LeafVisitor for LeafSpawner<'_, R> {
    fn on_leaf_visited(&mut self, position: Vec2, _appear: f64, depth: u32) {
        let config = self.leaves.config();
        if self.growth <= config.spawn_growth_threshold {
            return;
        }
        if self.rng.random::<f64>() >= config.spawn_probability {
            return;
        }

        let position = self.scene_from_device.transform_point(position);
        let leaf = FallingLeaf::detached(position, leaf_size(depth, self.max_depth), &mut *self.rng);
        if self.leaves.try_spawn(leaf) {
            self.spawned += 1;
        }
    }
}
