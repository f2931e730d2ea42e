#![no_std]

pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod sink;

pub use buffer::PixelBuffer;
pub use command::Command;
pub use config::{LedControlConfig, ReflectionBounds};
pub use engine::LedControl;
pub use error::{Error, Result};
pub use scheduler::{AnimationScheduler, FrameResult};
pub use sink::{InitError, RenderError, RenderSink, SinkConfig, SmartLedsSink, StripType};

pub use color::{ChannelOrder, Intensity, Pixel, Rgb, Velocity};
pub use embassy_time::{Duration, Instant};
