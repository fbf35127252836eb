use plotbind::api::ChartConfig;
use plotbind::core::{Color, Field, ValueFormat};

#[test]
fn default_config_validates() {
    ChartConfig::default().validate().expect("valid defaults");
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, ChartConfig::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::default()
        .with_fields(Field::Humidity, Field::DewPoint, Field::CloudCover)
        .with_dot_radius(6.0)
        .with_formats(ValueFormat::Percent, ValueFormat::Fixed(2))
        .with_cell_stroke(Color::rgb(0.9, 0.5, 0.5));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn invalid_radius_fails_validation() {
    let config = ChartConfig::default().with_dot_radius(0.0);
    assert!(config.validate().is_err());
}

#[test]
fn invalid_gradient_color_fails_validation() {
    let config = ChartConfig::default().with_gradient(
        Color::rgb(0.0, 0.0, 0.0),
        Color::rgb(1.5, 0.0, 0.0),
    );
    assert!(config.validate().is_err());
}

#[test]
fn zero_tick_count_fails_validation() {
    let mut config = ChartConfig::default();
    config.tick_count = 0;
    assert!(config.validate().is_err());
}

#[test]
fn hex_colors_parse_for_config_files() {
    let skyblue = Color::from_hex("#87ceeb").expect("hex");
    assert!((skyblue.red - 0.529).abs() < 1e-2);
    assert!((skyblue.alpha - 1.0).abs() < 1e-12);

    assert!(Color::from_hex("#87ceeb80").is_ok());
    assert!(Color::from_hex("#xyzxyz").is_err());
    assert!(Color::from_hex("#fff").is_err());
}

#[test]
fn non_ascii_hex_input_is_an_error_not_a_panic() {
    // Multi-byte characters can hit the 6- or 8-byte length exactly.
    assert!(Color::from_hex("aaa\u{20ac}").is_err());
    assert!(Color::from_hex("\u{20ac}\u{20ac}aa").is_err());
    assert!(Color::from_hex("#aaa\u{20ac}").is_err());
}
