use egui::Color32;
use egui_zoom_overlay::{OverlayConfig, DEFAULT_BUTTON_COLOR, DEFAULT_GLYPH_COLOR};

#[test]
fn test_empty_object_yields_defaults() {
    let cfg: OverlayConfig = serde_json::from_str("{}").expect("deserialize config");
    assert_eq!(cfg, OverlayConfig::default());
    assert_eq!(cfg.size, 40.);
}

#[test]
fn test_fields_default_independently() {
    let cfg: OverlayConfig =
        serde_json::from_str(r##"{"button_color":"#eeeeee"}"##).expect("deserialize config");
    assert_eq!(cfg.size, 40.);
    assert_eq!(cfg.glyph_color, DEFAULT_GLYPH_COLOR);
    assert_eq!(cfg.button_color, Color32::from_rgb(0xee, 0xee, 0xee));

    let cfg: OverlayConfig = serde_json::from_str(r#"{"size":60}"#).expect("deserialize config");
    assert_eq!(cfg.size, 60.);
    assert_eq!(cfg.button_color, DEFAULT_BUTTON_COLOR);
}

#[test]
fn test_serialized_form() {
    let cfg = OverlayConfig::default()
        .with_size(60.)
        .with_glyph_color(Color32::BLACK)
        .with_button_color(Color32::from_rgb(0xee, 0xee, 0xee));
    let json = serde_json::to_string(&cfg).expect("serialize config");
    assert_eq!(
        json,
        r##"{"size":60.0,"glyph_color":"#000000","button_color":"#eeeeee"}"##
    );

    let back: OverlayConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, cfg);
}

#[test]
fn test_malformed_color_is_rejected() {
    let err = serde_json::from_str::<OverlayConfig>(r#"{"glyph_color":"white"}"#)
        .expect_err("color without hex digits");
    assert!(err.to_string().contains("white"), "{err}");
}

#[test]
fn test_invalid_size_deserializes_but_fails_validation() {
    let cfg: OverlayConfig = serde_json::from_str(r#"{"size":-5}"#).expect("deserialize config");
    assert!(cfg.validate().is_err());
}
