use std::io::Write;

use raceway_sim::audio_engine::settings::{AudioEngineSettings, AudioEngineSettingsBuilder};
use raceway_sim::motion_engine::config::MotionConfig;

#[test]
fn test_motion_config_default_carries_canonical_constants() {
    let config = MotionConfig::default();
    assert_eq!(config.lateral_step, 2.0);
    assert_eq!(config.lateral_bound, 100.0);
    assert_eq!(config.speed_step, 0.1);
    // Bornes volontairement asymétriques (marche arrière lente)
    assert_eq!(config.min_speed, -1.0);
    assert_eq!(config.max_speed, 3.0);
    assert_eq!(config.track_half_length, 200.0);
    assert_eq!(config.weave_frequency, 16.0);
    assert_eq!(config.weave_amplitude, 0.5);
}

#[test]
fn test_motion_config_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("motion.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
lateral_step = 4.0
lateral_bound = 80.0
speed_step = 0.2
min_speed = -2.0
max_speed = 5.0
track_half_length = 300.0
weave_frequency = 8.0
weave_amplitude = 1.0
player_start_x = 10.0
player_start_y = 20.0
"#
    )
    .unwrap();

    let config = MotionConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.lateral_step, 4.0);
    assert_eq!(config.lateral_bound, 80.0);
    assert_eq!(config.track_half_length, 300.0);
    assert_eq!(config.player_start_y, 20.0);
}

#[test]
fn test_motion_config_missing_file_is_an_error() {
    // Le binaire retombe sur Default via unwrap_or_default()
    let result = MotionConfig::from_file("does/not/exist.toml");
    assert!(result.is_err());
}

#[test]
fn test_audio_settings_defaults() {
    let settings = AudioEngineSettings::default();
    assert_eq!(settings.pan_reference_width(), 100.0);
    assert_eq!(settings.silence_distance(), 200.0);
    assert_eq!(settings.pan_sweep_half_angle(), 45.0);
    assert_eq!(settings.shadow_coefficient(), 0.6);
    assert_eq!(settings.rear_attenuation(), 0.7);
    assert_eq!(settings.no_source_distance(), 1000.0);
}

#[test]
fn test_audio_settings_builder_overrides() {
    let settings = AudioEngineSettingsBuilder::default()
        .shadow_coefficient(0.5)
        .rear_attenuation(0.9)
        .build()
        .unwrap();
    assert_eq!(settings.shadow_coefficient(), 0.5);
    assert_eq!(settings.rear_attenuation(), 0.9);
    // Les champs non fournis gardent leur défaut
    assert_eq!(settings.silence_distance(), 200.0);
}
