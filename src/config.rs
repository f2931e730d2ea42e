use crate::color::{ChannelOrder, DEFAULT_CHANNEL_ORDER, Intensity};
use crate::sink::SinkConfig;

/// Channel thresholds used by gradient seeding and bounce steps
///
/// Animations stay in a dim sub-range of the 8-bit scale. The thresholds
/// are tuned for 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionBounds {
    /// A channel below this value moving down is reflected
    pub floor: u8,
    /// A channel above this value moving up is reflected
    pub ceiling: u8,
}

impl ReflectionBounds {
    pub const DEFAULT: Self = Self {
        floor: 8,
        ceiling: 64,
    };
}

impl Default for ReflectionBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the LED control engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedControlConfig {
    /// Word layout expected by the strip
    pub channel_order: ChannelOrder,
    /// Animation thresholds
    pub bounds: ReflectionBounds,
    /// Intensity before the first `set_intensity` call
    pub intensity: Intensity,
    /// Hardware sink setup
    pub sink: SinkConfig,
}

impl LedControlConfig {
    pub const DEFAULT: Self = Self {
        channel_order: DEFAULT_CHANNEL_ORDER,
        bounds: ReflectionBounds::DEFAULT,
        intensity: Intensity::FULL,
        sink: SinkConfig::DEFAULT,
    };
}

impl Default for LedControlConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
