//! Host-facing application: mode switching, commands and frame pacing
//!
//! Platform bindings own the real drawing surface and forward frames,
//! resizes and key presses here.

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::SceneConfig;
use crate::demo::BezierDemo;
use crate::render::{Surface, Viewport};
use crate::scene::{FrameStats, Scene};

/// Which scene is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Tree,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Demo => "Bezier demo",
            Mode::Tree => "Tree",
        }
    }
}

/// Discrete user commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SwitchMode(Mode),
    /// Restart the tree, or re-roll the demo curves
    Reset,
    Zoom,
}

impl Command {
    /// Default keyboard layout
    pub fn from_key(key: &str) -> Option<Command> {
        match key.to_ascii_lowercase().as_str() {
            "1" => Some(Command::SwitchMode(Mode::Demo)),
            "2" => Some(Command::SwitchMode(Mode::Tree)),
            "r" => Some(Command::Reset),
            "z" => Some(Command::Zoom),
            _ => None,
        }
    }
}

/// Frames-per-second over one-second windows
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f64,
    fps: f64,
}

impl FpsCounter {
    pub fn record(&mut self, dt: f64) {
        self.frames += 1;
        self.elapsed += dt.max(0.0);
        if self.elapsed >= 1.0 {
            self.fps = self.frames as f64 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

pub struct App<S: Surface> {
    surface: S,
    viewport: Viewport,
    mode: Mode,
    scene: Scene,
    demo: BezierDemo,
    rng: SmallRng,
    fps: FpsCounter,
    last_frame: Option<FrameStats>,
}

impl<S: Surface> App<S> {
    pub fn new(surface: S, viewport: Viewport, config: SceneConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut demo = BezierDemo::new();
        demo.randomize(viewport, &mut rng);
        Self {
            surface,
            viewport,
            mode: Mode::Tree,
            scene: Scene::with_seed(config, seed.wrapping_add(1)),
            demo,
            rng,
            fps: FpsCounter::default(),
            last_frame: None,
        }
    }

    /// Render one frame; `dt` is wall-clock seconds since the previous one
    pub fn frame(&mut self, dt: f64) {
        self.fps.record(dt);
        match self.mode {
            Mode::Tree => {
                self.last_frame = Some(self.scene.tick(&mut self.surface, self.viewport));
            }
            Mode::Demo => self.demo.tick(&mut self.surface, self.viewport),
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::Reset => match self.mode {
                Mode::Tree => self.scene.restart(),
                Mode::Demo => self.demo.randomize(self.viewport, &mut self.rng),
            },
            Command::Zoom => {
                if self.mode == Mode::Tree {
                    self.scene.activate_zoom();
                }
            }
        }
    }

    /// Dispatch a key press; returns whether the key was bound
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        info!("mode -> {}", mode.label());
        self.mode = mode;
        match mode {
            Mode::Demo => {
                self.demo.randomize(self.viewport, &mut self.rng);
                self.scene.cancel_zoom();
            }
            Mode::Tree => self.scene.restart(),
        }
    }

    /// The tree is regrown to fit the new size
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scene.restart();
    }

    pub fn reconfigure(&mut self, config: SceneConfig) {
        self.scene.reconfigure(config);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    pub fn last_frame(&self) -> Option<&FrameStats> {
        self.last_frame.as_ref()
    }
}
