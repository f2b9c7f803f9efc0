//! One-shot camera zoom toward the crown of the tree and back

use log::{debug, info};

use super::easing::ease;
use crate::config::ZoomConfig;
use crate::math::{lerp, Affine2};
use crate::render::Viewport;

/// Zoom state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomState {
    Idle,
    /// Elapsed zoom time since activation
    Active { time: f64 },
}

/// Camera parameters for one frame of an active zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFrame {
    /// Normalized time, 0..=1
    pub alpha: f64,
    /// Eased weight, 0 -> 1 -> 0 over the animation
    pub cyc: f64,
    /// Magnification
    pub scale: f64,
    /// Vertical point brought to the screen center
    pub focus_y: f64,
}

impl ZoomFrame {
    /// translate(center) * scale(z) * translate(-focus)
    pub fn transform(&self, viewport: Viewport) -> Affine2 {
        let center = viewport.center();
        Affine2::translation(center.x, center.y)
            .multiply(&Affine2::scale(self.scale, self.scale))
            .multiply(&Affine2::translation(-viewport.width / 2.0, -self.focus_y))
    }
}

#[derive(Debug, Clone)]
pub struct ZoomAnimator {
    state: ZoomState,
    config: ZoomConfig,
}

impl ZoomAnimator {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            state: ZoomState::Idle,
            config,
        }
    }

    /// Start the zoom. Ignored until the tree is fully grown.
    ///
    /// Returns whether the animation (re)started.
    pub fn activate(&mut self, growth: f64) -> bool {
        if growth < 1.0 {
            debug!("zoom ignored, tree still growing ({:.3})", growth);
            return false;
        }
        info!("zoom started ({}s)", self.config.duration);
        self.state = ZoomState::Active { time: 0.0 };
        true
    }

    /// Force back to idle without finishing
    pub fn cancel(&mut self) {
        self.state = ZoomState::Idle;
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ZoomState::Active { .. })
    }

    /// Advance the zoom clock by `dt` and compute this frame's camera.
    ///
    /// Returns `None` while idle. The frame that reaches the end of the
    /// animation is still returned, and the animator is idle afterwards.
    pub fn step(&mut self, dt: f64, viewport: Viewport) -> Option<ZoomFrame> {
        let ZoomState::Active { time } = self.state else {
            return None;
        };

        let time = time + dt;
        let alpha = (time / self.config.duration).clamp(0.0, 1.0);
        let cyc = ease(alpha, self.config.easing);
        let scale = 1.0 + self.config.scale * cyc;

        let base_y = viewport.height / 2.0;
        let top_y = viewport.height * self.config.focus_top_ratio;
        let focus_y = lerp(base_y, top_y, cyc);

        if alpha >= 1.0 {
            debug!("zoom finished");
            self.state = ZoomState::Idle;
        } else {
            self.state = ZoomState::Active { time };
        }

        Some(ZoomFrame {
            alpha,
            cyc,
            scale,
            focus_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    const DT: f64 = 0.016;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_starts_idle() {
        let mut zoom = ZoomAnimator::new(ZoomConfig::default());
        assert_eq!(zoom.state(), ZoomState::Idle);
        assert!(zoom.step(DT, viewport()).is_none());
    }

    #[test]
    fn test_activation_requires_full_growth() {
        let mut zoom = ZoomAnimator::new(ZoomConfig::default());
        assert!(!zoom.activate(0.999));
        assert_eq!(zoom.state(), ZoomState::Idle);

        assert!(zoom.activate(1.0));
        assert_eq!(zoom.state(), ZoomState::Active { time: 0.0 });
    }

    #[test]
    fn test_self_terminates() {
        let config = ZoomConfig {
            duration: 1.0,
            ..Default::default()
        };
        let mut zoom = ZoomAnimator::new(config);
        zoom.activate(1.0);

        let mut last = None;
        for _ in 0..200 {
            match zoom.step(DT, viewport()) {
                Some(frame) => last = Some(frame),
                None => break,
            }
        }

        let last = last.unwrap();
        assert_eq!(last.alpha, 1.0);
        assert_eq!(last.cyc, 0.0);
        assert_eq!(last.scale, 1.0);
        assert_eq!(zoom.state(), ZoomState::Idle);
    }

    #[test]
    fn test_smooth_pulse_also_returns_to_rest() {
        let config = ZoomConfig {
            duration: 0.5,
            easing: crate::animation::Easing::SmoothPulse,
            ..Default::default()
        };
        let mut zoom = ZoomAnimator::new(config);
        zoom.activate(1.0);

        let mut last = None;
        while let Some(frame) = zoom.step(DT, viewport()) {
            last = Some(frame);
        }
        let last = last.unwrap();
        assert_eq!((last.alpha, last.cyc, last.scale), (1.0, 0.0, 1.0));
        assert_eq!(last.focus_y, 300.0);
    }

    #[test]
    fn test_peak_zoom_focuses_upward() {
        let config = ZoomConfig {
            duration: 1.0,
            ..Default::default()
        };
        let mut zoom = ZoomAnimator::new(config);
        zoom.activate(1.0);

        let frame = zoom.step(0.5, viewport()).unwrap();
        assert!((frame.cyc - 1.0).abs() < 1e-12);
        assert!((frame.scale - 1.35).abs() < 1e-12);
        assert!((frame.focus_y - 150.0).abs() < 1e-9);
        assert!(zoom.is_active());
    }

    #[test]
    fn test_transform_maps_focus_to_center() {
        let frame = ZoomFrame {
            alpha: 0.5,
            cyc: 1.0,
            scale: 1.35,
            focus_y: 150.0,
        };
        let vp = viewport();
        let center = frame.transform(vp).transform_point(Vec2::new(400.0, 150.0));
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_reactivation_restarts_clock() {
        let mut zoom = ZoomAnimator::new(ZoomConfig::default());
        zoom.activate(1.0);
        zoom.step(1.0, viewport());
        zoom.activate(1.0);
        assert_eq!(zoom.state(), ZoomState::Active { time: 0.0 });
    }

    #[test]
    fn test_cancel() {
        let mut zoom = ZoomAnimator::new(ZoomConfig::default());
        zoom.activate(1.0);
        zoom.cancel();
        assert!(!zoom.is_active());
    }
}
