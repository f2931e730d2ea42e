//! Static color fill effect

use super::Effect;
use crate::color::Pixel;

/// Fills all LEDs with one color
#[derive(Debug, Clone, Copy)]
pub struct StaticColorEffect {
    color: Pixel,
}

impl StaticColorEffect {
    pub const fn new(color: Pixel) -> Self {
        Self { color }
    }
}

impl Effect for StaticColorEffect {
    fn apply(&mut self, leds: &mut [Pixel]) {
        leds.fill(self.color);
    }
}
