//! Recursive branch generator
//!
//! The tree is never stored. Each frame the generator walks the implicit
//! binary tree from the trunk, deriving every segment's geometry from the
//! growth progress, the recursion depth and the global time:
//!
//! - a depth only exists once `floor(max_depth * growth)` reaches it
//! - each depth fades in over its own window of growth, so deeper branches
//!   start appearing only after shallower ones are partially grown
//! - a time-driven sway bends every segment, with a per-depth frequency so
//!   branches do not move in lockstep

use std::f64::consts::PI;

use super::leaf::{LeafEmitter, LeafVisitor};
use crate::color::{ColorGradient, Rgb};
use crate::config::{ColorConfig, MAX_SUPPORTED_DEPTH};
use crate::math::{lerp, map_range, Vec2};
use crate::render::{Surface, Viewport};

/// Fraction of the growth range by which the deepest level is delayed
const APPEAR_DELAY: f64 = 0.6;
/// Width of each level's fade-in window, in growth units
const APPEAR_WINDOW: f64 = 0.45;
/// The trunk is drawn shorter than its nominal length
const ROOT_LENGTH_FACTOR: f64 = 0.85;
/// Child length relative to the parent's effective length
const CHILD_LENGTH_FACTOR: f64 = 0.7;
/// Growth below which only the seed is drawn
const SEED_PHASE_END: f64 = 0.12;
/// Trunk height at full growth, relative to the viewport height
const TRUNK_HEIGHT_RATIO: f64 = 0.33;

const BASE_LINE_WIDTH: f64 = 14.0;
const TIP_LINE_WIDTH: f64 = 1.0;
const TIP_OPACITY: f64 = 0.35;

/// What one frame of tree drawing produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeStats {
    /// Segments drawn at each depth
    pub segments_per_depth: Vec<usize>,
    /// Static leaves drawn
    pub leaves: usize,
    /// Effective (drawn) length of the trunk segment
    pub root_length: Option<f64>,
    /// Only the seed was drawn
    pub seed_only: bool,
}

impl TreeStats {
    pub fn segments(&self) -> usize {
        self.segments_per_depth.iter().sum()
    }

    /// Number of depth levels with at least one segment
    pub fn levels(&self) -> usize {
        self.segments_per_depth.iter().take_while(|&&n| n > 0).count()
    }

    pub fn deepest(&self) -> Option<u32> {
        self.levels().checked_sub(1).map(|d| d as u32)
    }

    fn record_segment(&mut self, depth: u32) {
        let depth = depth as usize;
        if self.segments_per_depth.len() <= depth {
            self.segments_per_depth.resize(depth + 1, 0);
        }
        self.segments_per_depth[depth] += 1;
    }
}

/// Deepest level reachable at a given growth
pub fn active_max_depth(max_depth: u32, growth: f64) -> u32 {
    let max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
    ((max_depth as f64 * growth.clamp(0.0, 1.0)).floor() as u32).min(max_depth)
}

/// Fade-in fraction of a level with the given depth ratio
pub fn appear_fraction(depth_ratio: f64, growth: f64) -> f64 {
    let start = depth_ratio * APPEAR_DELAY;
    let end = start + APPEAR_WINDOW;
    let span = (end - start).max(f64::EPSILON);
    ((growth - start) / span).clamp(0.0, 1.0)
}

/// Opening half-angle between sibling branches
pub fn spread_angle(depth_ratio: f64) -> f64 {
    map_range(depth_ratio, 0.0, 1.0, PI / 9.0, PI / 3.5)
}

/// Geometry of a single cubic segment in its local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentShape {
    pub control1: Vec2,
    pub control2: Vec2,
    pub tip: Vec2,
}

impl SegmentShape {
    /// Segment growing up (negative y) with a lateral sway
    pub fn new(length: f64, depth: u32, depth_ratio: f64, time: f64) -> Self {
        let curve = length * (0.18 + depth_ratio * 0.5);
        let phase = time * (0.65 + depth as f64 * 0.07);
        let sway = phase.sin() * curve;

        Self {
            control1: Vec2::new(sway * 0.55, -length * 0.3),
            control2: Vec2::new(-sway * 0.45, -length * 0.8),
            tip: Vec2::new(sway * 0.15, -length),
        }
    }
}

/// Draws the tree for one frame
pub struct BranchGenerator<'a> {
    max_depth: u32,
    gradient: &'a ColorGradient,
    colors: &'a ColorConfig,
    leaf: LeafEmitter,
    stats: TreeStats,
}

impl<'a> BranchGenerator<'a> {
    pub fn new(max_depth: u32, gradient: &'a ColorGradient, colors: &'a ColorConfig) -> Self {
        let max_depth = max_depth.clamp(1, MAX_SUPPORTED_DEPTH);
        Self {
            max_depth,
            gradient,
            colors,
            leaf: LeafEmitter::new(max_depth, colors),
            stats: TreeStats::default(),
        }
    }

    /// Draw the whole tree rooted at the bottom center of the viewport
    pub fn draw_tree(
        mut self,
        surface: &mut dyn Surface,
        visitor: &mut dyn LeafVisitor,
        viewport: Viewport,
        time: f64,
        growth: f64,
    ) -> TreeStats {
        let base_height = viewport.height * TRUNK_HEIGHT_RATIO * growth;
        let root_angle = (time * 0.5).sin() * (PI / 90.0);

        surface.save();
        surface.translate(viewport.width / 2.0, viewport.height);

        if growth < SEED_PHASE_END {
            let radius = map_range(growth, 0.0, SEED_PHASE_END, 2.0, 6.0);
            surface.begin_path();
            surface.circle(Vec2::ZERO, radius);
            surface.fill(self.colors.trunk.with_alpha(1.0));
            surface.restore();
            self.stats.seed_only = true;
            return self.stats;
        }

        self.generate(surface, visitor, base_height, root_angle, 0, time, growth);
        surface.restore();
        self.stats
    }

    /// Draw one segment at the current origin and recurse into its children
    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        &mut self,
        surface: &mut dyn Surface,
        visitor: &mut dyn LeafVisitor,
        length: f64,
        angle: f64,
        depth: u32,
        time: f64,
        growth: f64,
    ) {
        let current_max = active_max_depth(self.max_depth, growth);
        if depth > current_max {
            return;
        }

        let depth_ratio = depth as f64 / self.max_depth as f64;
        let appear = appear_fraction(depth_ratio, growth);
        if appear <= 0.0 {
            return;
        }

        let mut length = length * appear;
        if depth == 0 {
            length *= ROOT_LENGTH_FACTOR;
            self.stats.root_length = Some(length);
        }

        let color: Rgb = if depth == 0 {
            self.colors.root
        } else {
            self.gradient.get(depth as usize)
        };
        let line_width = lerp(BASE_LINE_WIDTH, TIP_LINE_WIDTH, depth_ratio) * appear;
        let opacity = lerp(1.0, TIP_OPACITY, depth_ratio) * appear;

        let shape = SegmentShape::new(length, depth, depth_ratio, time);

        surface.save();
        surface.rotate(angle);

        surface.begin_path();
        surface.move_to(Vec2::ZERO);
        surface.cubic_to(shape.control1, shape.control2, shape.tip);
        surface.stroke(color.with_alpha(opacity), line_width);
        self.stats.record_segment(depth);

        surface.translate(shape.tip.x, shape.tip.y);

        if depth_ratio > 0.85 && appear > 0.6 {
            self.leaf.emit(surface, visitor, time, appear, depth);
            self.stats.leaves += 1;
        }

        if depth < current_max && appear > 0.3 {
            let child_length = length * CHILD_LENGTH_FACTOR;
            let spread = spread_angle(depth_ratio);
            let jitter = (depth as f64 * 8.8 + time * 0.45).sin() * (PI / 70.0);

            for (turn, time_offset) in [(spread + jitter, 0.2), (-spread + jitter, 0.3)] {
                surface.save();
                surface.rotate(turn);
                self.generate(surface, visitor, child_length, angle, depth + 1, time + time_offset, growth);
                surface.restore();
            }
        }

        surface.restore();
    }
}
