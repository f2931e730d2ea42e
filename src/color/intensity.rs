//! Global strip brightness
//!
//! Intensity is never applied to stored pixels. It travels next to the
//! encoded frame and the sink scales the output.

/// Brightness scalar for the whole strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intensity {
    /// Legacy 8-bit scale factor, valid in `0..=255`
    Level(i32),
    /// Normalized brightness, valid in `0.0..=1.0`
    Normalized(f32),
}

impl Default for Intensity {
    fn default() -> Self {
        Self::FULL
    }
}

impl Intensity {
    pub const FULL: Self = Self::Level(255);
    pub const OFF: Self = Self::Level(0);

    /// Returns true if the value lies inside the range of its representation
    pub fn is_valid(self) -> bool {
        match self {
            Self::Level(level) => (0..=255).contains(&level),
            Self::Normalized(value) => (0.0..=1.0).contains(&value),
        }
    }

    /// 8-bit brightness handed to the render sink
    ///
    /// Out of range values are clamped; NaN maps to 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn level(self) -> u8 {
        match self {
            Self::Level(level) => level.clamp(0, 255) as u8,
            Self::Normalized(value) => libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8,
        }
    }
}

impl From<u8> for Intensity {
    fn from(level: u8) -> Self {
        Self::Level(i32::from(level))
    }
}

impl From<f32> for Intensity {
    fn from(value: f32) -> Self {
        Self::Normalized(value)
    }
}
