//! Signed per-channel color velocity
//!
//! Gradient seeding and bounce steps advance every channel by a small signed
//! delta. Reflection at a threshold negates the delta of that channel only.

use super::{Channel, Pixel};

/// Largest step magnitude a velocity channel may hold
pub const MAX_STEP: i8 = 16;

const fn clamp_step(step: i8) -> i8 {
    if step > MAX_STEP {
        MAX_STEP
    } else if step < -MAX_STEP {
        -MAX_STEP
    } else {
        step
    }
}

/// Per-step delta for each channel, clamped to `[-MAX_STEP, MAX_STEP]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Velocity {
    white: i8,
    red: i8,
    green: i8,
    blue: i8,
}

impl Velocity {
    /// Velocity that leaves every channel unchanged
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(white: i8, red: i8, green: i8, blue: i8) -> Self {
        Self {
            white: clamp_step(white),
            red: clamp_step(red),
            green: clamp_step(green),
            blue: clamp_step(blue),
        }
    }

    /// Create a velocity with the white channel at rest
    pub const fn rgb(red: i8, green: i8, blue: i8) -> Self {
        Self::new(0, red, green, blue)
    }

    /// Decode a velocity stored as two's complement bytes in a pixel
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_encoded(encoded: Pixel) -> Self {
        Self::new(
            encoded.white as i8,
            encoded.red as i8,
            encoded.green as i8,
            encoded.blue as i8,
        )
    }

    pub const fn channel(self, channel: Channel) -> i8 {
        match channel {
            Channel::White => self.white,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Invert the direction of one channel
    pub const fn reflect(&mut self, channel: Channel) {
        match channel {
            Channel::White => self.white = -self.white,
            Channel::Red => self.red = -self.red,
            Channel::Green => self.green = -self.green,
            Channel::Blue => self.blue = -self.blue,
        }
    }

    /// Returns true if no channel moves
    pub const fn is_zero(self) -> bool {
        self.white == 0 && self.red == 0 && self.green == 0 && self.blue == 0
    }
}
