mod common;

mod tests {
    use led_control::color::{DIM_BLUE, DIM_WHITE};
    use led_control::{Command, Error, Intensity, Pixel, Velocity};

    use super::common::engine;

    #[test]
    fn test_execute_renders_once() {
        let mut engine = engine(3);
        engine.execute(Command::SetColor(DIM_BLUE)).unwrap();
        assert_eq!(engine.sink().frames.len(), 1);
        assert!(engine.buffer().as_slice().iter().all(|p| *p == DIM_BLUE));

        engine.execute(Command::AdjustColor).unwrap();
        assert_eq!(engine.sink().frames.len(), 2);
    }

    #[test]
    fn test_execute_ignored_intensity_does_not_render() {
        let mut engine = engine(3);
        engine
            .execute(Command::SetIntensity(Intensity::Normalized(2.0)))
            .unwrap();
        assert!(engine.sink().frames.is_empty());
        assert_eq!(engine.intensity(), Intensity::FULL);
    }

    #[test]
    fn test_execute_set_velocity_does_not_render() {
        let mut engine = engine(3);
        engine
            .execute(Command::SetVelocity(Velocity::rgb(1, 2, 3)))
            .unwrap();
        assert!(engine.sink().frames.is_empty());
        assert_eq!(engine.velocity(), Velocity::rgb(1, 2, 3));
    }

    #[test]
    fn test_batch_renders_once() {
        let mut engine = engine(2);
        let pattern = [DIM_WHITE, DIM_BLUE];
        engine
            .execute_batch([
                Command::SetIntensity(Intensity::Level(32)),
                Command::SetPattern(&pattern),
                Command::SetColorGradient {
                    initial: Pixel::rgb(10, 10, 10),
                    velocity: Velocity::rgb(2, 0, 0),
                },
                Command::AdjustColor,
            ])
            .unwrap();

        assert_eq!(engine.sink().frames.len(), 1);
        assert_eq!(engine.sink().last_frame().unwrap().1, 32);
        assert_eq!(engine.pixel(0), Ok(Pixel::rgb(12, 10, 10)));
        assert_eq!(engine.pixel(1), Ok(Pixel::rgb(14, 10, 10)));
    }

    #[test]
    fn test_batch_without_changes_does_not_render() {
        let mut engine = engine(2);
        engine
            .execute_batch([
                Command::SetIntensity(Intensity::Level(-4)),
                Command::SetVelocity(Velocity::ZERO),
            ])
            .unwrap();
        assert!(engine.sink().frames.is_empty());
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let mut engine = engine(2);
        let short = [DIM_WHITE];
        let result = engine.execute_batch([
            Command::SetColor(DIM_BLUE),
            Command::SetPattern(&short),
            Command::SetColor(DIM_WHITE),
        ]);

        assert_eq!(
            result,
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(engine.buffer().as_slice().iter().all(|p| *p == DIM_BLUE));
        assert!(engine.sink().frames.is_empty());
    }
}
