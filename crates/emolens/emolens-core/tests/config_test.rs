use emolens_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EmolensConfig::from_toml("").unwrap();

    assert_eq!(config.history.capacity, 10);

    assert_eq!(config.state.high_engagement_valence, 0.5);
    assert_eq!(config.state.low_engagement_valence, -0.3);
    assert_eq!(config.state.low_load_arousal, 0.25);
    assert_eq!(config.state.high_load_arousal, 0.55);
    assert_eq!(config.state.frustration_momentum, -0.03);
    assert_eq!(config.state.frustration_arousal_trend, 0.03);
    assert_eq!(config.state.improving_momentum, 0.04);
    assert_eq!(
        config.state.distress_emotions,
        vec!["anger".to_string(), "fear".to_string(), "sadness".to_string()]
    );

    assert_eq!(config.session.max_idle_secs, 3600);
    assert_eq!(config.session.export_dir, ".");

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[history]
capacity = 20

[state]
high_engagement_valence = 0.7
distress_emotions = ["angry", "fearful"]
"#;
    let config = EmolensConfig::from_toml(toml).unwrap();
    assert_eq!(config.history.capacity, 20);
    assert_eq!(config.state.high_engagement_valence, 0.7);
    assert!(config.state.is_distress("angry"));
    assert!(!config.state.is_distress("anger"));
    // Non-overridden fields keep defaults
    assert_eq!(config.state.low_engagement_valence, -0.3);
    assert_eq!(config.session.max_idle_secs, 3600);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = EmolensConfig::from_toml("[history]\ncapacity = \"ten\"").unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn config_toml_roundtrip() {
    let config = EmolensConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = EmolensConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.history.capacity, config.history.capacity);
    assert_eq!(
        roundtripped.state.distress_emotions,
        config.state.distress_emotions
    );
}
