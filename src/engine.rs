use crate::buffer::PixelBuffer;
use crate::color::{ChannelOrder, Intensity, Pixel, Velocity};
use crate::config::{LedControlConfig, ReflectionBounds};
use crate::effect::{BounceEffect, Effect, GradientEffect, StaticColorEffect};
use crate::error::Result;
use crate::sink::RenderSink;

/// LED control engine - owns the pixel buffer and the render sink
///
/// Every setter is split in two steps: `apply_*` mutates the engine state,
/// [`flush`](Self::flush) transmits the buffer. The `set_*` methods run both
/// and render exactly once.
///
/// `N` is the longest strip the sink can address.
pub struct LedControl<S: RenderSink, const N: usize> {
    // External dependencies and configuration
    sink: S,
    order: ChannelOrder,
    bounds: ReflectionBounds,

    // Internal state
    intensity: Intensity,
    buffer: PixelBuffer<N>,
    bounce: BounceEffect,
    words: [u32; N],
}

impl<S: RenderSink, const N: usize> LedControl<S, N> {
    /// Create the engine and initialize the sink for `led_count` LEDs
    ///
    /// Nothing is rendered until the first operation.
    pub fn new(mut sink: S, led_count: usize, config: &LedControlConfig) -> Result<Self> {
        let buffer = PixelBuffer::new(led_count)?;
        if let Err(err) = sink.initialize(led_count, &config.sink) {
            log::error!("render sink initialization failed: {}", err);
            return Err(err.into());
        }
        log::info!(
            "led control ready: {} leds, {:?} order",
            led_count,
            config.channel_order
        );

        Ok(Self {
            sink,
            order: config.channel_order,
            bounds: config.bounds,
            intensity: config.intensity,
            buffer,
            bounce: BounceEffect::new(Velocity::ZERO, config.bounds),
            words: [0; N],
        })
    }

    /// Number of LEDs in the strip
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false, the strip holds at least one LED
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub fn pixel(&self, index: usize) -> Result<Pixel> {
        self.buffer.get(index)
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Running velocity used by [`adjust_color`](Self::adjust_color)
    pub fn velocity(&self) -> Velocity {
        self.bounce.velocity()
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Store a new intensity
    ///
    /// Returns false and keeps the previous intensity if `value` is out of range.
    pub fn apply_intensity(&mut self, value: Intensity) -> bool {
        if !value.is_valid() {
            log::warn!("ignoring out of range intensity {:?}", value);
            return false;
        }
        log::info!("setting intensity to {:?}", value);
        self.intensity = value;
        true
    }

    /// Write the same color to every LED
    pub fn apply_color(&mut self, color: Pixel) {
        StaticColorEffect::new(color).apply(self.buffer.as_mut_slice());
    }

    /// Replace the buffer with one pixel per LED
    pub fn apply_pattern(&mut self, pixels: &[Pixel]) -> Result<()> {
        log::info!("setting pattern");
        self.buffer.copy_from(pixels)
    }

    /// Seed a gradient and keep `velocity` as the running bounce velocity
    pub fn apply_color_gradient(&mut self, initial: Pixel, velocity: Velocity) {
        GradientEffect::new(initial, velocity, self.bounds.ceiling)
            .apply(self.buffer.as_mut_slice());
        self.bounce.set_velocity(velocity);
    }

    /// Replace the running bounce velocity
    pub fn apply_velocity(&mut self, velocity: Velocity) {
        self.bounce.set_velocity(velocity);
    }

    /// Advance every LED by one bounce step
    pub fn apply_adjust_color(&mut self) {
        self.bounce.apply(self.buffer.as_mut_slice());
    }

    /// Transmit the buffer to the sink
    pub fn flush(&mut self) -> Result<()> {
        let words = self.buffer.encode_into(self.order, &mut self.words)?;
        log::debug!("rendering {} leds", words.len());
        if let Err(err) = self.sink.render(words, self.intensity.level()) {
            log::error!("render failed: {}", err);
            return Err(err.into());
        }
        log::debug!("rendered");
        Ok(())
    }

    /// Set global intensity and render
    ///
    /// Out of range values are ignored without rendering.
    pub fn set_intensity(&mut self, value: impl Into<Intensity>) -> Result<()> {
        if self.apply_intensity(value.into()) {
            self.flush()?;
        }
        Ok(())
    }

    /// Fill the strip with one color and render
    pub fn set_color(&mut self, color: Pixel) -> Result<()> {
        self.apply_color(color);
        self.flush()
    }

    /// Replace the buffer and render
    pub fn set_pattern(&mut self, pixels: &[Pixel]) -> Result<()> {
        self.apply_pattern(pixels)?;
        self.flush()
    }

    /// Seed a gradient and render
    pub fn set_color_gradient(&mut self, initial: Pixel, velocity: Velocity) -> Result<()> {
        self.apply_color_gradient(initial, velocity);
        self.flush()
    }

    /// Advance the bounce animation by one step and render
    pub fn adjust_color(&mut self) -> Result<()> {
        self.apply_adjust_color();
        self.flush()
    }
}
