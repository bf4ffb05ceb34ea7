mod support;

mod tests {
    use myrtio_pwm_light::{
        CommandQueue, Duration, Instant, LightCommand, TickScheduler, Topology,
    };

    use crate::support::lamp;

    #[test]
    fn test_drains_commands_before_tick() {
        let queue = CommandQueue::<4>::new();
        let mut scheduler = TickScheduler::new(lamp(Topology::Dimmable), queue.receiver());

        queue.try_send(LightCommand::SetBrightness(10)).unwrap();
        let result = scheduler.tick(Instant::from_millis(0));

        assert_eq!(scheduler.lamp().target_brightness(), Some(10));
        assert_eq!(scheduler.lamp().brightness(), 1);
        assert_eq!(result.next_deadline, Instant::from_millis(5));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));
        assert!(queue.try_receive().is_none());
    }

    #[test]
    fn test_keeps_fixed_period() {
        let queue = CommandQueue::<4>::new();
        let mut scheduler = TickScheduler::new(lamp(Topology::Dimmable), queue.receiver());

        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(5));
        let result = scheduler.tick(Instant::from_millis(12));
        assert_eq!(result.next_deadline, Instant::from_millis(15));
        assert_eq!(result.sleep_duration, Duration::from_millis(3));
    }

    #[test]
    fn test_late_tick_does_not_sleep() {
        let queue = CommandQueue::<4>::new();
        let mut scheduler = TickScheduler::new(lamp(Topology::Dimmable), queue.receiver());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(12));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_resyncs_after_long_stall() {
        let queue = CommandQueue::<4>::new();
        let mut scheduler = TickScheduler::new(lamp(Topology::Dimmable), queue.receiver());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(105));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));
    }

    #[test]
    fn test_ramp_step_duration() {
        let queue = CommandQueue::<4>::new();
        let scheduler = TickScheduler::with_period(
            lamp(Topology::Dimmable),
            queue.receiver(),
            Duration::from_millis(10),
        );
        assert_eq!(scheduler.ramp_step_duration(), Duration::from_millis(60));
    }
}
