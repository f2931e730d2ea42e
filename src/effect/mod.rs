//! Buffer mutations used by the engine
//!
//! Effects only touch the pixels they are given. Rendering is left to the
//! engine so several effects can be applied before a single flush.

mod bounce;
mod gradient;
mod static_color;

pub use bounce::BounceEffect;
pub use gradient::GradientEffect;
pub use static_color::StaticColorEffect;

use crate::color::Pixel;

pub trait Effect {
    /// Mutate the frame in place
    fn apply(&mut self, leds: &mut [Pixel]);
}
