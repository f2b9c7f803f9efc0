//! Easing curves for the camera animation

use serde::{Deserialize, Serialize};

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Smooth ease-in-out
    EaseInOut,
    /// Rises 0 -> 1 -> 0 along half a sine wave (go there and come back)
    #[default]
    SinePulse,
    /// Same round trip as `SinePulse` but built from two smoothsteps
    SmoothPulse,
}

impl Easing {
    /// Whether the curve returns to 0 at t = 1
    pub fn is_round_trip(&self) -> bool {
        matches!(self, Easing::SinePulse | Easing::SmoothPulse)
    }
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::SinePulse => {
            // sin(pi) is not exactly zero in floating point
            if t >= 1.0 {
                0.0
            } else {
                (t * std::f64::consts::PI).sin()
            }
        }
        Easing::SmoothPulse => {
            let x = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            x * x * (3.0 - 2.0 * x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_bounds() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert!(ease(0.0, easing).abs() < 1e-12, "Easing {:?} should start at 0", easing);
            assert!((ease(1.0, easing) - 1.0).abs() < 1e-12, "Easing {:?} should end at 1", easing);
        }
    }

    #[test]
    fn test_pulse_round_trip() {
        for easing in [Easing::SinePulse, Easing::SmoothPulse] {
            assert!(easing.is_round_trip());
            assert_eq!(ease(0.0, easing), 0.0);
            assert_eq!(ease(1.0, easing), 0.0);
            assert!((ease(0.5, easing) - 1.0).abs() < 1e-12, "Easing {:?} should peak at 0.5", easing);
        }
    }

    #[test]
    fn test_sine_pulse_symmetric() {
        let v1 = ease(0.2, Easing::SinePulse);
        let v2 = ease(0.8, Easing::SinePulse);
        assert!((v1 - v2).abs() < 1e-12);
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let v1 = ease(0.25, Easing::EaseInOut);
        let v2 = ease(0.75, Easing::EaseInOut);
        assert!((v1 + v2 - 1.0).abs() < 1e-12, "EaseInOut should be symmetric");
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::Linear), 0.0);
        assert_eq!(ease(1.5, Easing::Linear), 1.0);
        assert_eq!(ease(1.5, Easing::SinePulse), 0.0);
    }
}
