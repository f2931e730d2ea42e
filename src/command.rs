//! Engine commands
//!
//! A command describes one engine operation as a value, so a service layer
//! can queue requests and apply several of them before a single render.

use crate::color::{Intensity, Pixel, Velocity};
use crate::engine::LedControl;
use crate::error::Result;
use crate::sink::RenderSink;

/// Operations that can be performed on the LED control engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// Set global intensity, ignored when out of range
    SetIntensity(Intensity),
    /// Fill the strip with one color
    SetColor(Pixel),
    /// Replace every pixel
    SetPattern(&'a [Pixel]),
    /// Seed a gradient and start bouncing with its velocity
    SetColorGradient { initial: Pixel, velocity: Velocity },
    /// Replace the running bounce velocity
    SetVelocity(Velocity),
    /// Advance the bounce animation by one step
    AdjustColor,
}

impl Command<'_> {
    /// Apply the command without rendering
    ///
    /// Returns true if the command changed the engine state.
    fn apply<S: RenderSink, const N: usize>(self, engine: &mut LedControl<S, N>) -> Result<bool> {
        match self {
            Command::SetIntensity(value) => return Ok(engine.apply_intensity(value)),
            Command::SetColor(color) => engine.apply_color(color),
            Command::SetPattern(pixels) => engine.apply_pattern(pixels)?,
            Command::SetColorGradient { initial, velocity } => {
                engine.apply_color_gradient(initial, velocity);
            }
            Command::SetVelocity(velocity) => {
                // Velocity is not visible until the next bounce step
                engine.apply_velocity(velocity);
                return Ok(false);
            }
            Command::AdjustColor => engine.apply_adjust_color(),
        }
        Ok(true)
    }
}

impl<S: RenderSink, const N: usize> LedControl<S, N> {
    /// Apply a command and render if it changed the strip
    pub fn execute(&mut self, command: Command<'_>) -> Result<()> {
        if command.apply(self)? {
            self.flush()?;
        }
        Ok(())
    }

    /// Apply commands in order and render once
    ///
    /// Stops at the first failing command. Commands applied before it are
    /// kept, but nothing is rendered.
    pub fn execute_batch<'a, I>(&mut self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = Command<'a>>,
    {
        let mut changed = false;
        for command in commands {
            changed |= command.apply(self)?;
        }
        if changed {
            self.flush()?;
        }
        Ok(())
    }
}
