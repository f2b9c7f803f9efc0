//! Falling leaf particles
//!
//! Leaves detached from the grown tree drift down under a stylized gravity,
//! spin, turn from autumn gold toward bright yellow and fade out. The
//! population is bounded: the cap is checked when a leaf is admitted.

use rand::Rng;

use crate::color::Rgb;
use crate::config::{ColorConfig, FallingLeafConfig};
use crate::math::Vec2;
use crate::render::Surface;
use crate::tree::leaf::{stroke_midrib, trace_leaf_outline};

/// Falling leaf half-width relative to its length
const FALLING_WIDTH_RATIO: f64 = 0.6;

/// A single detached leaf
#[derive(Debug, Clone, PartialEq)]
pub struct FallingLeaf {
    pub position: Vec2,
    pub angle: f64,
    pub angular_velocity: f64,
    pub velocity: Vec2,
    pub size: f64,
    /// 1.0 = fully visible, removed once it reaches 0
    pub life: f64,
}

impl FallingLeaf {
    pub fn new(position: Vec2, velocity: Vec2, angular_velocity: f64, size: f64) -> Self {
        Self {
            position,
            angle: 0.0,
            angular_velocity,
            velocity,
            size,
            life: 1.0,
        }
    }

    /// Leaf just let go by a branch: slight random spin and sideways drift
    pub fn detached<R: Rng + ?Sized>(position: Vec2, size: f64, rng: &mut R) -> Self {
        let angular_velocity = (rng.random::<f64>() * 2.0 - 1.0) * 0.03;
        let vx = (rng.random::<f64>() * 2.0 - 1.0) * 0.25;
        let vy = rng.random::<f64>() * 0.05 - 0.02;
        Self::new(position, Vec2::new(vx, vy), angular_velocity, size)
    }

    /// Fill color for the current life: autumn tint blending toward the highlight
    pub fn tint(&self, colors: &ColorConfig) -> Rgb {
        let t = (1.0 - self.life).clamp(0.0, 1.0);
        colors.leaf_autumn.lerp(&colors.fall_highlight, t)
    }
}

/// Why a leaf left the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    ExitedBottom,
    Faded,
}

/// Outcome of one `advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub exited: usize,
    pub faded: usize,
}

impl AdvanceReport {
    pub fn removed(&self) -> usize {
        self.exited + self.faded
    }
}

/// System owning all live falling leaves
#[derive(Debug, Clone)]
pub struct FallingLeafSystem {
    leaves: Vec<FallingLeaf>,
    config: FallingLeafConfig,
}

impl FallingLeafSystem {
    pub fn new(config: FallingLeafConfig) -> Self {
        Self {
            leaves: Vec::with_capacity(config.max_count),
            config,
        }
    }

    pub fn config(&self) -> &FallingLeafConfig {
        &self.config
    }

    /// Admit a leaf unless the system is at capacity
    pub fn try_spawn(&mut self, leaf: FallingLeaf) -> bool {
        if self.is_full() {
            return false;
        }
        self.leaves.push(leaf);
        true
    }

    pub fn is_full(&self) -> bool {
        self.leaves.len() >= self.config.max_count
    }

    /// Integrate one fixed step and cull leaves below the viewport or faded out
    pub fn advance(&mut self, viewport_height: f64) -> AdvanceReport {
        let config = &self.config;
        let floor = viewport_height + config.exit_margin;
        let mut report = AdvanceReport::default();

        self.leaves.retain_mut(|leaf| {
            leaf.velocity.y += config.gravity * config.step;
            leaf.position.x += leaf.velocity.x * config.horizontal_damping;
            leaf.position.y += leaf.velocity.y;
            leaf.angle += leaf.angular_velocity * config.spin_damping;
            leaf.life -= config.fade_rate;

            match removal_reason(leaf, floor) {
                Some(Removal::ExitedBottom) => {
                    report.exited += 1;
                    false
                }
                Some(Removal::Faded) => {
                    report.faded += 1;
                    false
                }
                None => true,
            }
        });

        report
    }

    /// Draw every live leaf in scene space
    pub fn draw(&self, surface: &mut dyn Surface, colors: &ColorConfig) {
        for leaf in &self.leaves {
            let half_width = leaf.size * FALLING_WIDTH_RATIO;

            surface.save();
            surface.translate(leaf.position.x, leaf.position.y);
            surface.rotate(leaf.angle);

            trace_leaf_outline(surface, leaf.size, half_width, 0.22);
            surface.fill(leaf.tint(colors).with_alpha(0.9 * leaf.life));
            surface.stroke(colors.fall_edge.with_alpha(0.9), 1.0);
            stroke_midrib(surface, leaf.size, Rgb::WHITE.with_alpha(0.18 * leaf.life));

            surface.restore();
        }
    }

    pub fn clear(&mut self) {
        self.leaves.clear();
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallingLeaf> {
        self.leaves.iter()
    }
}

/// Both conditions are checked after the same integration step; leaving the
/// screen takes precedence when they trip together.
fn removal_reason(leaf: &FallingLeaf, floor: f64) -> Option<Removal> {
    if leaf.position.y > floor {
        Some(Removal::ExitedBottom)
    } else if leaf.life <= 0.0 {
        Some(Removal::Faded)
    } else {
        None
    }
}
