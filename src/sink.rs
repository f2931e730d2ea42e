//! Hardware render sink
//!
//! The sink owns signal generation for the strip. The engine hands it the
//! packed pixel words and the global brightness on every flush.

use core::fmt;

use smart_leds::SmartLedsWrite;

use crate::color::{ChannelOrder, Pixel, Rgb};

/// Default PWM/DMA target frequency, 800 kHz
pub const TARGET_FREQ: u32 = 800_000;
/// Default data pin
pub const GPIO_PIN: u8 = 18;
/// Default DMA channel
pub const DMA_CHANNEL: u8 = 10;

/// Color order and channel count expected by the strip controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripType {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
    Rgbw,
    Rbgw,
    Grbw,
    Gbrw,
    Brgw,
    Bgrw,
}

impl StripType {
    /// Returns true if the strip has a dedicated white LED
    pub const fn is_rgbw(self) -> bool {
        matches!(
            self,
            Self::Rgbw | Self::Rbgw | Self::Grbw | Self::Gbrw | Self::Brgw | Self::Bgrw
        )
    }
}

/// Hardware channel setup passed to [`RenderSink::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub gpio_pin: u8,
    pub dma_channel: u8,
    pub strip_type: StripType,
    /// Hardware brightness before the first render
    pub brightness: u8,
    pub target_freq: u32,
    pub invert: bool,
}

impl SinkConfig {
    pub const DEFAULT: Self = Self {
        gpio_pin: GPIO_PIN,
        dma_channel: DMA_CHANNEL,
        strip_type: StripType::Gbr,
        brightness: 255,
        target_freq: TARGET_FREQ,
        invert: false,
    };
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The sink cannot drive this strip type
    UnsupportedStrip(StripType),
    /// The sink cannot address this many LEDs
    TooManyLeds(usize),
    /// Driver specific failure code
    Hardware(i32),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStrip(strip) => write!(f, "unsupported strip type {strip:?}"),
            Self::TooManyLeds(count) => write!(f, "cannot address {count} leds"),
            Self::Hardware(code) => write!(f, "hardware error {code}"),
        }
    }
}

impl core::error::Error for InitError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Render called before a successful initialization
    NotInitialized,
    /// The underlying writer rejected the frame
    Write,
    /// Driver specific failure code
    Hardware(i32),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("sink is not initialized"),
            Self::Write => f.write_str("frame write failed"),
            Self::Hardware(code) => write!(f, "hardware error {code}"),
        }
    }
}

impl core::error::Error for RenderError {}

/// Hardware facing output of the engine
///
/// Implement this trait to support different hardware platforms.
pub trait RenderSink {
    /// Prepare the hardware channel for a strip of `led_count` LEDs
    fn initialize(&mut self, led_count: usize, config: &SinkConfig) -> Result<(), InitError>;

    /// Transmit one frame of packed pixel words
    fn render(&mut self, words: &[u32], brightness: u8) -> Result<(), RenderError>;
}

/// Render sink backed by any `smart-leds` RGB driver
///
/// Words are unpacked with the sink's channel order, the white channel is
/// dropped and brightness is applied in software.
pub struct SmartLedsSink<W> {
    writer: W,
    order: ChannelOrder,
    initialized: bool,
}

impl<W> SmartLedsSink<W> {
    pub const fn new(writer: W, order: ChannelOrder) -> Self {
        Self {
            writer,
            order,
            initialized: false,
        }
    }

    /// Get a reference to the wrapped writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> RenderSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn initialize(&mut self, led_count: usize, config: &SinkConfig) -> Result<(), InitError> {
        if config.strip_type.is_rgbw() {
            return Err(InitError::UnsupportedStrip(config.strip_type));
        }
        log::debug!(
            "smart-leds sink ready for {} leds ({:?})",
            led_count,
            config.strip_type
        );
        self.initialized = true;
        Ok(())
    }

    fn render(&mut self, words: &[u32], brightness: u8) -> Result<(), RenderError> {
        if !self.initialized {
            return Err(RenderError::NotInitialized);
        }
        let order = self.order;
        let colors = words
            .iter()
            .map(move |&word| Rgb::from(Pixel::from_word(word, order)));
        self.writer
            .write(smart_leds::brightness(colors, brightness))
            .map_err(|_| RenderError::Write)
    }
}
