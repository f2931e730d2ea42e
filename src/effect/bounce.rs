//! Velocity bounce animation step
//!
//! Each step advances every pixel by a shared velocity. The velocity is a
//! running accumulator: a reflection triggered by one pixel carries over to
//! the following pixels and to the next step.

use super::Effect;
use crate::color::{Channel, Pixel, Velocity};
use crate::config::ReflectionBounds;

/// Bouncing color cycle between the floor and ceiling thresholds
#[derive(Debug, Clone, Copy)]
pub struct BounceEffect {
    velocity: Velocity,
    bounds: ReflectionBounds,
}

impl BounceEffect {
    pub const fn new(velocity: Velocity, bounds: ReflectionBounds) -> Self {
        Self { velocity, bounds }
    }

    /// Current running velocity
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub const fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    fn step_channel(&mut self, value: &mut u8, channel: Channel) {
        let step = self.velocity.channel(channel);
        let rising_past_ceiling = *value > self.bounds.ceiling && step > 0;
        let falling_past_floor = *value < self.bounds.floor && step < 0;
        if rising_past_ceiling || falling_past_floor {
            self.velocity.reflect(channel);
        }
        *value = value.wrapping_add_signed(self.velocity.channel(channel));
    }
}

impl Effect for BounceEffect {
    fn apply(&mut self, leds: &mut [Pixel]) {
        for led in leds {
            for channel in Channel::ALL {
                self.step_channel(led.channel_mut(channel), channel);
            }
        }
    }
}
