mod tests {
    use myrtio_pwm_light::gamma::{DutyCurve, LOG_DUTY_LUT, MAX_DUTY, linear_duty, log_duty};

    #[test]
    fn test_log_table_is_monotonic() {
        assert_eq!(LOG_DUTY_LUT[0], 0);
        assert_eq!(LOG_DUTY_LUT[255], MAX_DUTY);
        for pair in LOG_DUTY_LUT.windows(2) {
            assert!(pair[0] <= pair[1], "{pair:?}");
        }
    }

    #[test]
    fn test_log_duty() {
        assert_eq!(log_duty(1), 1);
        assert_eq!(log_duty(50), 56);
        assert_eq!(log_duty(128), 225);
        assert_eq!(log_duty(255), MAX_DUTY);
    }

    #[test]
    fn test_linear_duty() {
        assert_eq!(linear_duty(0), 0);
        assert_eq!(linear_duty(128), 513);
        assert_eq!(linear_duty(255), MAX_DUTY);
    }

    #[test]
    fn test_curve_default_is_linear() {
        assert_eq!(DutyCurve::default(), DutyCurve::Linear);
        assert_eq!(DutyCurve::Linear.apply(100), linear_duty(100));
        assert_eq!(DutyCurve::Logarithmic.apply(100), 146);
    }
}
