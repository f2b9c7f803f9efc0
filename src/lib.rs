use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod animation;
pub mod app;
pub mod color;
pub mod config;
pub mod demo;
pub mod logging;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;
pub mod tree;

pub use app::{App, Command, Mode};
pub use config::{ConfigError, SceneConfig};
pub use render::{Surface, Viewport};
pub use scene::{FrameStats, Scene};

use render::CanvasSurface;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Fractal tree animation bound to a 2D canvas
#[wasm_bindgen]
pub struct FractalTreeApp {
    app: App<CanvasSurface>,
}

#[wasm_bindgen]
impl FractalTreeApp {
    /// Create the app drawing into `canvas`, using its current pixel size
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FractalTreeApp, JsValue> {
        let viewport = Viewport::new(canvas.width() as f64, canvas.height() as f64);

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2D context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let app = App::new(CanvasSurface::new(ctx), viewport, SceneConfig::default(), seed);
        log::info!("fractal tree ready ({}x{})", viewport.width, viewport.height);

        Ok(Self { app })
    }

    /// Replace the scene configuration from YAML and restart the tree
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.app.reconfigure(config);
        Ok(())
    }

    /// Update and render a frame; `dt` is seconds since the last frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f64) {
        self.app.frame(dt);
    }

    /// Resize the drawing area; the tree regrows from its seed
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.app.resize(Viewport::new(width, height));
    }

    /// Forward a `KeyboardEvent.key`; returns whether it was handled
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.app.handle_key(key)
    }

    // === Commands ===

    /// Show the tree mode and regrow from the seed
    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.app.execute(Command::SwitchMode(Mode::Tree));
    }

    /// Returns whether the zoom actually started
    #[wasm_bindgen]
    pub fn zoom(&mut self) -> bool {
        if self.app.mode() != Mode::Tree {
            return false;
        }
        self.app.scene_mut().activate_zoom()
    }

    #[wasm_bindgen]
    pub fn show_demo(&mut self) {
        self.app.execute(Command::SwitchMode(Mode::Demo));
    }

    // === Status ===

    #[wasm_bindgen]
    pub fn mode_label(&self) -> String {
        self.app.mode().label().to_string()
    }

    #[wasm_bindgen]
    pub fn fps(&self) -> f64 {
        self.app.fps()
    }

    /// Growth progress (0.0 to 1.0)
    #[wasm_bindgen]
    pub fn growth_progress(&self) -> f64 {
        self.app.scene().growth()
    }

    #[wasm_bindgen]
    pub fn is_zoom_active(&self) -> bool {
        self.app.scene().is_zoom_active()
    }

    #[wasm_bindgen]
    pub fn falling_leaf_count(&self) -> usize {
        self.app.scene().leaves().len()
    }

    /// Suggested download name for a screenshot of the current mode
    #[wasm_bindgen]
    pub fn screenshot_name(&self) -> String {
        screenshot_name(self.app.mode()).to_string()
    }
}

fn screenshot_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Tree => "growing_tree.png",
        Mode::Demo => "bezier_demo.png",
    }
}
