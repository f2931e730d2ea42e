//! Spatial gradient seeding
//!
//! Every animated channel starts at the initial color and accumulates its
//! velocity step from pixel to pixel. A step that would carry the channel
//! above the ceiling, or below zero, is reflected before it is applied.
//! The white channel gets its step applied once, uniformly.

use super::Effect;
use crate::color::{Channel, Pixel, Velocity};

/// Seeds a ramp of colors starting at `initial`
#[derive(Debug, Clone, Copy)]
pub struct GradientEffect {
    initial: Pixel,
    velocity: Velocity,
    ceiling: u8,
}

impl GradientEffect {
    pub const fn new(initial: Pixel, velocity: Velocity, ceiling: u8) -> Self {
        Self {
            initial,
            velocity,
            ceiling,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn seed_channel(&self, leds: &mut [Pixel], channel: Channel) {
        let ceiling = i16::from(self.ceiling);
        let mut current = i16::from(self.initial.channel(channel));
        let mut step = i16::from(self.velocity.channel(channel));

        for led in leds {
            *led.channel_mut(channel) = current as u8;

            let next = current + step;
            if next > ceiling || next < 0 {
                step = -step;
            }
            current = (current + step).clamp(0, i16::from(u8::MAX));
        }
    }
}

impl Effect for GradientEffect {
    fn apply(&mut self, leds: &mut [Pixel]) {
        for channel in Channel::RAMPED {
            self.seed_channel(leds, channel);
        }

        // White is not ramped, its step is applied once to every pixel
        let white = self
            .initial
            .white
            .saturating_add_signed(self.velocity.channel(Channel::White));
        for led in leds {
            led.white = white;
        }
    }
}
