mod tests {
    use scroll_pacer::schedule::{HIGH_BPM, LOW_BPM, beat_seconds};

    const EPS: f32 = 1e-6;

    #[test]
    fn test_session_starts_at_high_bpm() {
        assert!((beat_seconds(0.0, 25) - 60.0 / HIGH_BPM).abs() < EPS);
        assert!((beat_seconds(0.0, 25) - 0.4).abs() < EPS);
    }

    #[test]
    fn test_rate_holds_low_after_decay_window() {
        // A third of 25 minutes is 500 seconds.
        assert!((beat_seconds(500.0, 25) - 60.0 / LOW_BPM).abs() < EPS);
        assert!((beat_seconds(2000.0, 25) - 60.0 / LOW_BPM).abs() < EPS);
    }

    #[test]
    fn test_duration_non_decreasing() {
        let mut last = 0.0f32;
        for t in 0..40 {
            let duration = beat_seconds(t as f32 * 25.0, 25);
            assert!(duration >= last);
            last = duration;
        }
    }

    #[test]
    fn test_shorter_session_decays_faster() {
        assert!(beat_seconds(100.0, 5) > beat_seconds(100.0, 60));
    }
}
