mod tests {
    use triglow_patterns::DutyRamp;

    #[test]
    fn test_ramp_starts_and_ends_at_zero() {
        let seq: Vec<u16> = DutyRamp::new(1023, 10).collect();
        assert_eq!(seq[0], 0);
        assert_eq!(*seq.last().unwrap(), 0);
    }

    #[test]
    fn test_ramp_peak_is_exactly_max_duty() {
        let seq: Vec<u16> = DutyRamp::new(1023, 10).collect();
        assert_eq!(seq.iter().copied().max(), Some(1023));
        assert_eq!(seq.iter().filter(|&&duty| duty == 1023).count(), 1);
    }

    #[test]
    fn test_ramp_monotone_up_then_down() {
        let seq: Vec<u16> = DutyRamp::new(1023, 10).collect();
        let peak = seq.iter().position(|&duty| duty == 1023).unwrap();
        assert!(seq[..=peak].windows(2).all(|w| w[0] < w[1]));
        assert!(seq[peak..].windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_ramp_length_matches_step_count() {
        for (max_duty, step) in [(1023u16, 10u16), (1000, 100), (10, 3), (9, 3), (5, 10), (1, 1)] {
            assert_eq!(
                DutyRamp::new(max_duty, step).count(),
                DutyRamp::step_count(max_duty, step),
                "max_duty={max_duty} step={step}"
            );
        }
    }

    #[test]
    fn test_ramp_is_deterministic() {
        let first: Vec<u16> = DutyRamp::new(1023, 10).collect();
        let second: Vec<u16> = DutyRamp::new(1023, 10).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 207);
    }

    #[test]
    fn test_ramp_step_not_dividing_max_still_peaks() {
        let seq: Vec<u16> = DutyRamp::new(10, 3).collect();
        assert_eq!(seq, [0, 3, 6, 9, 10, 7, 4, 1, 0]);
    }

    #[test]
    fn test_ramp_step_larger_than_max() {
        let seq: Vec<u16> = DutyRamp::new(5, 10).collect();
        assert_eq!(seq, [0, 5, 0]);
    }

    #[test]
    fn test_ramp_zero_max_is_a_single_zero() {
        let seq: Vec<u16> = DutyRamp::new(0, 10).collect();
        assert_eq!(seq, [0]);
    }
}
