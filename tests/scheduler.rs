mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use led_control::scheduler::DEFAULT_FRAME_DURATION;
    use led_control::{AnimationScheduler, Error, Pixel, RenderError, Velocity};

    use super::common::engine;

    fn result(deadline_ms: u64, sleep_ms: u64) -> (Instant, Duration) {
        (
            Instant::from_millis(deadline_ms),
            Duration::from_millis(sleep_ms),
        )
    }

    fn tick<S, const N: usize>(
        scheduler: &mut AnimationScheduler<S, N>,
        now_ms: u64,
    ) -> (Instant, Duration)
    where
        S: led_control::RenderSink,
    {
        let frame = scheduler.tick(Instant::from_millis(now_ms)).unwrap();
        (frame.next_deadline, frame.sleep_duration)
    }

    #[test]
    fn test_default_frame_duration() {
        let scheduler = AnimationScheduler::new(engine(1));
        assert_eq!(scheduler.frame_duration(), DEFAULT_FRAME_DURATION);
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(33));
    }

    #[test]
    fn test_tick_paces_frames() {
        let mut scheduler =
            AnimationScheduler::with_frame_duration(engine(2), Duration::from_millis(10));

        assert_eq!(tick(&mut scheduler, 0), result(10, 10));
        assert_eq!(tick(&mut scheduler, 10), result(20, 10));
        // Slightly behind schedule, no sleep
        assert_eq!(tick(&mut scheduler, 35), result(30, 0));
        // Far behind, backlog skipped
        assert_eq!(tick(&mut scheduler, 100), result(110, 10));

        assert_eq!(scheduler.engine().sink().frames.len(), 4);
    }

    #[test]
    fn test_tick_runs_bounce_step() {
        let mut scheduler = AnimationScheduler::new(engine(2));
        scheduler
            .engine_mut()
            .set_color_gradient(Pixel::OFF, Velocity::rgb(0, 0, 3))
            .unwrap();

        scheduler.tick(Instant::from_millis(0)).unwrap();
        scheduler.tick(Instant::from_millis(33)).unwrap();

        let engine = scheduler.into_engine();
        assert_eq!(engine.pixel(0), Ok(Pixel::rgb(0, 0, 6)));
        assert_eq!(engine.pixel(1), Ok(Pixel::rgb(0, 0, 9)));
        assert_eq!(engine.sink().frames.len(), 3);
    }

    #[test]
    fn test_tick_error_keeps_deadline() {
        let mut scheduler =
            AnimationScheduler::with_frame_duration(engine(1), Duration::from_millis(10));
        assert_eq!(tick(&mut scheduler, 0), result(10, 10));

        scheduler.engine_mut().sink_mut().render_error = Some(RenderError::Write);
        assert_eq!(
            scheduler.tick(Instant::from_millis(10)),
            Err(Error::Render(RenderError::Write))
        );

        scheduler.engine_mut().sink_mut().render_error = None;
        assert_eq!(tick(&mut scheduler, 10), result(20, 10));
    }
}
