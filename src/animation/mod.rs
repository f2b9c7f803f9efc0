//! Animation state machines driving the scene
//!
//! The growth clock gates how much of the tree exists; the zoom animator
//! reparameterizes the camera for a fixed window once the tree is grown.

mod easing;
mod growth_clock;
mod zoom;

pub use easing::{Easing, ease};
pub use growth_clock::GrowthClock;
pub use zoom::{ZoomAnimator, ZoomFrame, ZoomState};
