mod tests {
    use triglow_patterns::PatternId;

    #[test]
    fn test_cycle_order_is_fixed() {
        assert_eq!(
            PatternId::CYCLE,
            [
                PatternId::Chase,
                PatternId::BinaryCounter,
                PatternId::Random
            ]
        );
    }

    #[test]
    fn test_pattern_names() {
        assert_eq!(PatternId::Chase.as_str(), "chase");
        assert_eq!(PatternId::BinaryCounter.as_str(), "binary counter");
        assert_eq!(PatternId::Random.as_str(), "random");
    }
}
