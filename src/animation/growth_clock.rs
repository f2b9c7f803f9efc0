//! Growth progress of the tree, from seed (0.0) to fully grown (1.0)

/// Monotonic growth scalar advanced once per frame
#[derive(Debug, Clone, Copy)]
pub struct GrowthClock {
    progress: f64,
    step: f64,
}

impl GrowthClock {
    /// A negative or non-finite step leaves the clock stopped
    pub fn new(step: f64) -> Self {
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        Self { progress: 0.0, step }
    }

    /// Advance by one step, saturating at 1.0
    pub fn advance(&mut self) {
        if self.progress < 1.0 {
            self.progress = (self.progress + self.step).min(1.0);
        }
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Jump to a given progress; used by hosts scrubbing the animation
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_seed() {
        let clock = GrowthClock::new(0.0006);
        assert_eq!(clock.progress(), 0.0);
        assert!(!clock.is_complete());
    }

    #[test]
    fn test_monotonic_and_saturates() {
        for step in [0.0006, 0.3, 0.7, 2.5] {
            let mut clock = GrowthClock::new(step);
            let mut prev = clock.progress();
            for _ in 0..5000 {
                clock.advance();
                assert!(clock.progress() >= prev);
                assert!(clock.progress() <= 1.0);
                prev = clock.progress();
            }
            assert_eq!(clock.progress(), 1.0, "step {} should converge to exactly 1", step);
        }
    }

    #[test]
    fn test_idempotent_at_ceiling() {
        let mut clock = GrowthClock::new(0.1);
        clock.set_progress(1.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.progress(), 1.0);
        assert!(clock.is_complete());
    }

    #[test]
    fn test_never_runs_backwards() {
        for step in [-0.1, f64::NAN, f64::NEG_INFINITY] {
            let mut clock = GrowthClock::new(step);
            clock.set_progress(0.5);
            clock.advance();
            assert_eq!(clock.progress(), 0.5);
        }
    }

    #[test]
    fn test_reset() {
        let mut clock = GrowthClock::new(0.25);
        clock.advance();
        clock.advance();
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut clock = GrowthClock::new(0.1);
        clock.set_progress(1.7);
        assert_eq!(clock.progress(), 1.0);
        clock.set_progress(-3.0);
        assert_eq!(clock.progress(), 0.0);
    }
}
