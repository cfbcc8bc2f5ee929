use emolens_core::traits::ITrendTracker;
use emolens_session::EmotionHistory;
use proptest::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn window_never_exceeds_capacity() {
    let k = 10;
    let mut history = EmotionHistory::new(k);
    let values: Vec<f64> = (0..k + 5).map(|i| i as f64 / 20.0).collect();
    for v in &values {
        history.update(*v, *v);
    }

    assert_eq!(history.len(), k);
    assert_eq!(history.valences(), values[5..].to_vec());
    assert_eq!(history.arousals(), values[5..].to_vec());
}

#[test]
fn trends_are_zero_below_two_samples() {
    let mut history = EmotionHistory::new(10);
    assert_eq!(history.momentum(), 0.0);
    assert_eq!(history.arousal_trend(), 0.0);

    history.update(0.9, 0.9);
    assert_eq!(history.momentum(), 0.0);
    assert_eq!(history.arousal_trend(), 0.0);
}

#[test]
fn momentum_is_endpoint_difference_over_length() {
    let mut history = EmotionHistory::new(10);
    history.update(0.1, 0.5);
    history.update(0.2, 0.3);
    history.update(0.4, 0.2);

    assert!(approx(history.momentum(), 0.1));
    assert!(approx(history.arousal_trend(), -0.1));
}

#[test]
fn momentum_ignores_interior_samples() {
    let mut history = EmotionHistory::new(10);
    history.update(0.0, 0.0);
    history.update(1.0, 1.0);
    history.update(0.0, 0.0);
    assert_eq!(history.momentum(), 0.0);
}

#[test]
fn evicted_samples_stop_influencing_momentum() {
    let mut history = EmotionHistory::new(2);
    history.update(-1.0, 0.0);
    history.update(0.5, 0.0);
    history.update(0.5, 0.0);
    assert_eq!(history.momentum(), 0.0);
}

#[test]
fn separate_sessions_do_not_share_windows() {
    let mut a = EmotionHistory::for_session("a", 10);
    let mut b = EmotionHistory::for_session("b", 10);
    for _ in 0..3 {
        a.update(0.8, 0.5);
    }
    b.update(-0.8, 0.5);

    assert_eq!(b.len(), 1);
    assert_eq!(b.momentum(), 0.0);
    assert_eq!(b.valences(), vec![-0.8]);
    assert!(a.is_owned_by("a"));
    assert!(!b.is_owned_by("a"));
}

#[test]
fn unbound_history_has_no_owner() {
    let history = EmotionHistory::new(4);
    assert_eq!(history.owner(), None);
    assert!(!history.is_owned_by(""));
}

#[test]
fn loaded_zero_capacity_window_stays_bounded() {
    let mut h: EmotionHistory =
        serde_json::from_str(r#"{"owner":"s1","capacity":0,"samples":[]}"#).unwrap();
    assert_eq!(h.capacity(), 1);
    for i in 0..5 {
        h.update(i as f64 * 0.1, 0.2);
    }
    assert_eq!(h.len(), 1);
    assert!(h.is_owned_by("s1"));
}

#[test]
fn loaded_overfull_window_keeps_newest_samples() {
    let json = r#"{
        "owner": null,
        "capacity": 2,
        "samples": [
            {"valence": 0.1, "arousal": 0.1},
            {"valence": 0.2, "arousal": 0.2},
            {"valence": 0.3, "arousal": 0.3}
        ]
    }"#;
    let mut h: EmotionHistory = serde_json::from_str(json).unwrap();
    assert_eq!(h.valences(), vec![0.2, 0.3]);

    h.update(0.4, 0.4);
    h.update(0.5, 0.5);
    assert_eq!(h.len(), 2);
    assert_eq!(h.valences(), vec![0.4, 0.5]);
}

#[test]
fn saved_window_reloads_unchanged() {
    let mut h = EmotionHistory::for_session("s1", 3);
    h.update(0.1, 0.2);
    h.update(-0.4, 0.6);
    let reloaded: EmotionHistory = serde_json::from_str(&serde_json::to_string(&h).unwrap()).unwrap();
    assert_eq!(reloaded.capacity(), 3);
    assert_eq!(reloaded.valences(), h.valences());
    assert_eq!(reloaded.owner(), Some("s1"));
}

proptest! {
    #[test]
    fn retains_exactly_the_most_recent_samples(
        capacity in 1usize..20,
        values in proptest::collection::vec(-1.0f64..=1.0, 0..60),
    ) {
        let mut history = EmotionHistory::new(capacity);
        for v in &values {
            history.update(*v, 0.5);
        }
        let expected_len = values.len().min(capacity);
        prop_assert_eq!(history.len(), expected_len);
        prop_assert_eq!(history.valences(), values[values.len() - expected_len..].to_vec());
    }

    #[test]
    fn trends_are_bounded(
        values in proptest::collection::vec((-1.0f64..=1.0, 0.0f64..=1.0), 0..30),
    ) {
        let mut history = EmotionHistory::new(10);
        for (v, a) in &values {
            history.update(*v, *a);
        }
        // endpoints differ by at most the range width, divided by len >= 2
        prop_assert!(history.momentum().abs() <= 1.0);
        prop_assert!(history.arousal_trend().abs() <= 0.5);
    }
}
