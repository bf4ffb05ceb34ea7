mod tests {
    use myrtio_pwm_light::command::{DIMM_DOWN, DIMM_STOP, DIMM_STOP2, DIMM_UP};
    use myrtio_pwm_light::{CommandQueue, LightCommand, RelativeCommand, TrySendError};

    #[test]
    fn test_relative_codes() {
        assert_eq!(RelativeCommand::from_code(DIMM_STOP), RelativeCommand::Stop);
        assert_eq!(RelativeCommand::from_code(DIMM_DOWN), RelativeCommand::Down);
        assert_eq!(RelativeCommand::from_code(7), RelativeCommand::Down);
        assert_eq!(RelativeCommand::from_code(DIMM_STOP2), RelativeCommand::Stop);
        assert_eq!(RelativeCommand::from_code(DIMM_UP), RelativeCommand::Up);
        assert_eq!(RelativeCommand::from_code(15), RelativeCommand::Up);
        assert_eq!(RelativeCommand::from_code(-1), RelativeCommand::Stop);
        assert_eq!(RelativeCommand::default(), RelativeCommand::Unset);
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = CommandQueue::<4>::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.try_send(LightCommand::Switch(true)).unwrap();
        sender.try_send(LightCommand::SetBrightness(80)).unwrap();

        assert_eq!(receiver.try_receive(), Some(LightCommand::Switch(true)));
        assert_eq!(receiver.try_receive(), Some(LightCommand::SetBrightness(80)));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_full_queue_returns_command() {
        let queue = CommandQueue::<2>::new();
        queue.try_send(LightCommand::RelativeDim(DIMM_UP)).unwrap();
        queue.try_send(LightCommand::RelativeDim(DIMM_STOP)).unwrap();

        let rejected = LightCommand::SetTemperature(4000);
        assert_eq!(queue.try_send(rejected), Err(TrySendError(rejected)));

        // draining makes room again
        assert!(queue.try_receive().is_some());
        assert!(queue.try_send(rejected).is_ok());
    }
}
