//! RGB colors and the trunk-to-leaf depth gradient

use serde::{Deserialize, Serialize};

/// RGB color with 0..255 channels, kept as floats so gradients stay smooth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r * (1.0 - t) + other.r * t,
            g: self.g * (1.0 - t) + other.g * t,
            b: self.b * (1.0 - t) + other.b * t,
        }
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba { rgb: self, a }
    }
}

/// Color plus opacity, what the surface actually paints with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl Rgba {
    /// CSS `rgba(...)` string for canvas styles
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb.r.round().clamp(0.0, 255.0),
            self.rgb.g.round().clamp(0.0, 255.0),
            self.rgb.b.round().clamp(0.0, 255.0),
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Linear gradient sampled into a fixed number of steps
#[derive(Debug, Clone)]
pub struct ColorGradient {
    colors: Vec<Rgb>,
}

impl ColorGradient {
    pub fn new(start: Rgb, end: Rgb, steps: usize) -> Self {
        let colors = match steps {
            0 => Vec::new(),
            1 => vec![start],
            _ => (0..steps)
                .map(|i| start.lerp(&end, i as f64 / (steps - 1) as f64))
                .collect(),
        };
        Self { colors }
    }

    /// Color for a depth, clamped to the last entry
    pub fn get(&self, index: usize) -> Rgb {
        self.colors
            .get(index)
            .or_else(|| self.colors.last())
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
