//! Tests covering the generation parameter bundle.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = JigsawConfig::default();
    assert_eq!(cfg.horizontal, DEFAULT_GRID_DIVISIONS);
    assert_eq!(cfg.vertical, DEFAULT_GRID_DIVISIONS);
    assert_eq!(cfg.thickness, DEFAULT_THICKNESS);
    assert_eq!(cfg.image, None);
    assert_eq!(cfg.image_size(), ImageSize::unit());
    assert!(cfg.validate().is_ok());
}

#[test]
fn grid_is_clamped() {
    let cfg = JigsawConfig::new(1, 40, 0.1).unwrap();
    assert_eq!((cfg.horizontal, cfg.vertical), (2, 10));
    assert_eq!(cfg.grid().cell_count(), 20);
}

#[test]
fn thickness_is_validated() {
    for thickness in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let err = JigsawConfig::new(2, 2, thickness).unwrap_err();
        assert!(matches!(err, JigsawError::InvalidConfig { .. }), "{thickness}");
    }
}

#[test]
fn tessellation_is_validated() {
    let mut options = TessellationOptions::default();
    options.max_cord_deviation = 0.0;
    let err = options.validate().unwrap_err();
    assert!(err.to_string().contains("max_cord_deviation"));

    let mut options = TessellationOptions::default();
    options.tolerance = -1.0;
    assert!(options.validate().is_err());

    let mut options = TessellationOptions::default();
    options.max_subdivision_depth = 0;
    assert!(options.validate().is_err());

    let mut options = TessellationOptions::default();
    options.sampling_step_size = 2.0;
    assert!(options.validate().is_err());
}

#[test]
fn tiny_sampling_step_is_rejected() {
    let options = TessellationOptions {
        sampling_step_size: 1e-12,
        ..Default::default()
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(err, JigsawError::InvalidConfig { .. }));
    assert!(err.to_string().contains("sampling_step_size"));

    let cfg = JigsawConfig::default().with_tessellation(options);
    assert!(cfg.validate().is_err());

    let options = TessellationOptions {
        sampling_step_size: MIN_SAMPLING_STEP_SIZE,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn image_is_validated() {
    let cfg = JigsawConfig::default().with_image(ImageSize::new(0.0, 10.0));
    assert!(cfg.validate().is_err());

    let cfg = JigsawConfig::default().with_image(ImageSize::new(1024.0, 768.0));
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.image_size().as_vec2(), Vec2::new(1024.0, 768.0));
}

#[test]
fn serde_round_trip() {
    let cfg = JigsawConfig::new(4, 3, 0.25)
        .unwrap()
        .with_seed(99)
        .with_image(ImageSize::new(800.0, 600.0));
    let json = serde_json::to_string(&cfg).unwrap();
    let back: JigsawConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn serde_fills_missing_fields() {
    let cfg: JigsawConfig = serde_json::from_str(r#"{"horizontal": 5}"#).unwrap();
    assert_eq!(cfg.horizontal, 5);
    assert_eq!(cfg.vertical, DEFAULT_GRID_DIVISIONS);
    assert_eq!(cfg.tessellation, TessellationOptions::default());
}
