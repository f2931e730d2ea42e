#![allow(dead_code)]

use led_control::{
    ChannelOrder, InitError, LedControl, LedControlConfig, RenderError, RenderSink, SinkConfig,
};

/// Sink that keeps every rendered frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub initialized: Option<(usize, SinkConfig)>,
    pub frames: Vec<(Vec<u32>, u8)>,
    pub init_error: Option<InitError>,
    pub render_error: Option<RenderError>,
}

impl RecordingSink {
    pub fn failing_init(err: InitError) -> Self {
        Self {
            init_error: Some(err),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&(Vec<u32>, u8)> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn initialize(&mut self, led_count: usize, config: &SinkConfig) -> Result<(), InitError> {
        if let Some(err) = self.init_error {
            return Err(err);
        }
        self.initialized = Some((led_count, *config));
        Ok(())
    }

    fn render(&mut self, words: &[u32], brightness: u8) -> Result<(), RenderError> {
        if let Some(err) = self.render_error {
            return Err(err);
        }
        self.frames.push((words.to_vec(), brightness));
        Ok(())
    }
}

pub const MAX_LEDS: usize = 16;

pub fn config() -> LedControlConfig {
    LedControlConfig {
        channel_order: ChannelOrder::Wrgb,
        ..LedControlConfig::DEFAULT
    }
}

pub fn engine(led_count: usize) -> LedControl<RecordingSink, MAX_LEDS> {
    LedControl::new(RecordingSink::default(), led_count, &config()).unwrap()
}
