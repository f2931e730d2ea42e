//! Animation pacing
//!
//! Drives bounce steps at a fixed frame rate without async or
//! platform-specific timers. The caller sleeps between frames.

use embassy_time::{Duration, Instant};

use crate::engine::LedControl;
use crate::error::Result;
use crate::sink::RenderSink;

/// Default animation rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on the animation rate.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Timing of the next animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Runs one bounce step per frame with drift correction.
///
/// If the caller falls more than two frames behind, the backlog is skipped
/// instead of being caught up in a burst.
///
/// ```ignore
/// let mut scheduler = AnimationScheduler::new(engine);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()))?;
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct AnimationScheduler<S: RenderSink, const N: usize> {
    engine: LedControl<S, N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<S: RenderSink, const N: usize> AnimationScheduler<S, N> {
    /// Uses `DEFAULT_FRAME_DURATION` for frame timing.
    pub fn new(engine: LedControl<S, N>) -> Self {
        Self::with_frame_duration(engine, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(engine: LedControl<S, N>, frame_duration: Duration) -> Self {
        Self {
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Run one bounce step and return the timing of the next one.
    ///
    /// The frame deadline does not advance when the step fails.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult> {
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        self.engine.adjust_color()?;

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn engine(&self) -> &LedControl<S, N> {
        &self.engine
    }

    /// Get a mutable reference to the engine, e.g. to reseed the gradient.
    pub fn engine_mut(&mut self) -> &mut LedControl<S, N> {
        &mut self.engine
    }

    pub fn into_engine(self) -> LedControl<S, N> {
        self.engine
    }
}
