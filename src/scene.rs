//! The tree scene: all per-run state and the per-frame driver

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::animation::{GrowthClock, ZoomAnimator, ZoomFrame};
use crate::color::ColorGradient;
use crate::config::{SceneConfig, MAX_SUPPORTED_DEPTH};
use crate::particles::{AdvanceReport, FallingLeafSystem};
use crate::render::{Surface, Viewport};
use crate::tree::{BranchGenerator, LeafSpawner, TreeStats};

const DEFAULT_SEED: u64 = 0x5eed_f00d;

/// Summary of one rendered frame
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub tree: TreeStats,
    pub zoom: Option<ZoomFrame>,
    pub spawned: usize,
    pub culled: AdvanceReport,
}

/// Growing tree with its falling leaves and camera
pub struct Scene {
    config: SceneConfig,
    gradient: ColorGradient,
    growth: GrowthClock,
    time: f64,
    zoom: ZoomAnimator,
    leaves: FallingLeafSystem,
    rng: SmallRng,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Scene with a fixed random seed for reproducible leaf fall
    ///
    /// An out-of-range config is drawn with its depth clamped and a stopped
    /// growth clock where the speed is unusable.
    pub fn with_seed(config: SceneConfig, seed: u64) -> Self {
        if let Err(e) = config.validate() {
            warn!("scene config out of range, clamping: {}", e);
        }
        let depth = config.max_depth.clamp(1, MAX_SUPPORTED_DEPTH);
        let gradient = ColorGradient::new(
            config.colors.trunk,
            config.colors.leaf_green,
            depth as usize + 1,
        );
        Self {
            gradient,
            growth: GrowthClock::new(config.growth_speed),
            time: 0.0,
            zoom: ZoomAnimator::new(config.zoom.clone()),
            leaves: FallingLeafSystem::new(config.falling_leaves.clone()),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    /// Swap configuration and start over from the seed
    pub fn reconfigure(&mut self, config: SceneConfig) {
        let seed_rng = SmallRng::from_rng(&mut self.rng);
        *self = Self::with_seed(config, 0);
        self.rng = seed_rng;
        info!("scene reconfigured (max depth {})", self.config.max_depth);
    }

    /// Back to a seed: growth, time, zoom and falling leaves all reset
    pub fn restart(&mut self) {
        self.growth.reset();
        self.time = 0.0;
        self.zoom.cancel();
        self.leaves.clear();
        info!("tree restarted");
    }

    /// Start the camera zoom; only honored once the tree is fully grown
    pub fn activate_zoom(&mut self) -> bool {
        self.zoom.activate(self.growth.progress())
    }

    pub fn cancel_zoom(&mut self) {
        self.zoom.cancel();
    }

    /// Advance all animation state by one frame and draw it
    pub fn tick(&mut self, surface: &mut dyn Surface, viewport: Viewport) -> FrameStats {
        self.time += self.config.time_step;
        self.growth.advance();

        surface.clear(viewport, self.config.colors.background.with_alpha(1.0));

        let zoom = self.zoom.step(self.config.time_step, viewport);
        if let Some(frame) = &zoom {
            surface.apply_transform(&frame.transform(viewport));
        }

        let growth = self.growth.progress();
        let max_depth = self.config.max_depth.clamp(1, MAX_SUPPORTED_DEPTH);
        let camera = surface.transform();
        let mut spawner = LeafSpawner::new(&mut self.leaves, &mut self.rng, growth, max_depth, camera);
        let tree = BranchGenerator::new(max_depth, &self.gradient, &self.config.colors)
            .draw_tree(surface, &mut spawner, viewport, self.time, growth);
        let spawned = spawner.spawned();

        let culled = self.leaves.advance(viewport.height);
        self.leaves.draw(surface, &self.config.colors);

        FrameStats {
            tree,
            zoom,
            spawned,
            culled,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn growth(&self) -> f64 {
        self.growth.progress()
    }

    /// Jump the growth clock, e.g. to preview a fully grown tree
    pub fn set_growth(&mut self, progress: f64) {
        self.growth.set_progress(progress);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_zoom_active(&self) -> bool {
        self.zoom.is_active()
    }

    pub fn leaves(&self) -> &FallingLeafSystem {
        &self.leaves
    }

    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallingLeafConfig;
    use crate::render::RecordingSurface;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn fast_config() -> SceneConfig {
        SceneConfig {
            max_depth: 6,
            growth_speed: 0.05,
            ..Default::default()
        }
    }

    #[test]
    fn test_gradient_matches_depth() {
        let scene = Scene::new(SceneConfig::default());
        assert_eq!(scene.gradient().len(), 10);
    }

    #[test]
    fn test_tick_advances_clocks() {
        let mut scene = Scene::new(SceneConfig::default());
        let mut surface = RecordingSurface::new();
        scene.tick(&mut surface, viewport());
        assert!((scene.time() - 0.016).abs() < 1e-12);
        assert!((scene.growth() - 0.0006).abs() < 1e-12);
    }

    #[test]
    fn test_first_frames_draw_seed() {
        let mut scene = Scene::new(SceneConfig::default());
        let mut surface = RecordingSurface::new();
        let stats = scene.tick(&mut surface, viewport());
        assert!(stats.tree.seed_only);
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn test_grows_to_full_tree() {
        let mut scene = Scene::new(fast_config());
        let mut surface = RecordingSurface::new();
        let mut stats = FrameStats::default();
        for _ in 0..30 {
            surface.clear_commands();
            stats = scene.tick(&mut surface, viewport());
        }
        assert_eq!(scene.growth(), 1.0);
        assert_eq!(stats.tree.levels(), 7);
    }

    #[test]
    fn test_zoom_ignored_while_growing() {
        let mut scene = Scene::new(SceneConfig::default());
        assert!(!scene.activate_zoom());
        assert!(!scene.is_zoom_active());
    }

    #[test]
    fn test_zoom_runs_and_finishes() {
        let mut config = fast_config();
        config.zoom.duration = 0.5;
        let mut scene = Scene::new(config);
        scene.set_growth(1.0);
        assert!(scene.activate_zoom());

        let mut surface = RecordingSurface::new();
        let first = scene.tick(&mut surface, viewport());
        assert!(first.zoom.is_some());

        let mut frames = 1;
        while scene.is_zoom_active() {
            surface.clear_commands();
            scene.tick(&mut surface, viewport());
            frames += 1;
        }
        assert_eq!(frames, 32);
        surface.clear_commands();
        assert!(scene.tick(&mut surface, viewport()).zoom.is_none());
    }

    #[test]
    fn test_leaves_fall_when_grown() {
        let config = SceneConfig {
            max_depth: 6,
            falling_leaves: FallingLeafConfig {
                spawn_probability: 0.05,
                max_count: 20,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut scene = Scene::with_seed(config, 42);
        scene.set_growth(1.0);

        let mut surface = RecordingSurface::new();
        for _ in 0..200 {
            surface.clear_commands();
            scene.tick(&mut surface, viewport());
            assert!(scene.leaves().len() <= 20);
        }
        assert!(!scene.leaves().is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut config = fast_config();
        config.falling_leaves.spawn_probability = 1.0;
        let mut scene = Scene::new(config);
        scene.set_growth(1.0);
        scene.activate_zoom();

        let mut surface = RecordingSurface::new();
        scene.tick(&mut surface, viewport());
        assert!(!scene.leaves().is_empty());

        scene.restart();
        assert_eq!(scene.growth(), 0.0);
        assert_eq!(scene.time(), 0.0);
        assert!(!scene.is_zoom_active());
        assert!(scene.leaves().is_empty());
    }

    #[test]
    fn test_same_seed_same_fall() {
        let run = || {
            let mut config = fast_config();
            config.falling_leaves.spawn_probability = 0.1;
            let mut scene = Scene::with_seed(config, 9);
            scene.set_growth(1.0);
            let mut surface = RecordingSurface::new();
            for _ in 0..50 {
                surface.clear_commands();
                scene.tick(&mut surface, viewport());
            }
            scene.leaves().iter().cloned().collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_unchecked_config_is_clamped() {
        let config = SceneConfig {
            max_depth: u32::MAX,
            growth_speed: -0.2,
            ..Default::default()
        };
        let mut scene = Scene::new(config);
        assert_eq!(scene.gradient().len(), MAX_SUPPORTED_DEPTH as usize + 1);

        let mut surface = RecordingSurface::new();
        scene.set_growth(0.05);
        for _ in 0..3 {
            surface.clear_commands();
            assert!(scene.tick(&mut surface, viewport()).tree.seed_only);
        }
        assert_eq!(scene.growth(), 0.05);
    }

    #[test]
    fn test_reconfigure_restarts() {
        let mut scene = Scene::new(SceneConfig::default());
        scene.set_growth(0.5);
        scene.reconfigure(fast_config());
        assert_eq!(scene.growth(), 0.0);
        assert_eq!(scene.gradient().len(), 7);
        assert_eq!(scene.config().max_depth, 6);
    }
}
