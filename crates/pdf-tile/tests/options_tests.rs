use pdf_tile::*;
use std::path::PathBuf;

fn options_for(input: &str) -> TileOptions {
    TileOptions {
        input: PathBuf::from(input),
        ..Default::default()
    }
}

#[test]
fn test_defaults() {
    let options = TileOptions::default();
    assert_eq!(options.output, PathBuf::from("output.pdf"));
    assert_eq!(options.repeats, 1);
    assert_eq!(options.images_per_page, 1);
    assert_eq!(options.mode, LayoutMode::Grid);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.margins, Margins::uniform(10.0));
    assert_eq!(options.gap_pt, 5.0);
    assert_eq!(options.raster_dpi, 300.0);
}

#[test]
fn test_validation_no_input() {
    let options = TileOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(TileError::Config(msg)) => {
            assert!(msg.contains("No input"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_counts() {
    let mut options = options_for("photo.jpg");
    assert!(options.validate().is_ok());

    options.repeats = 0;
    assert!(options.validate().is_err());

    options.repeats = 3;
    options.images_per_page = 0;
    assert!(options.validate().is_err());

    // Business cards ignore images_per_page entirely
    options.mode = LayoutMode::BusinessCard;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_errors_are_usage_errors() {
    let mut options = options_for("photo.jpg");
    options.repeats = 0;
    let err = options.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
}

#[test]
fn test_validation_margins_swallow_page() {
    let mut options = options_for("photo.jpg");
    options.margins = Margins::uniform(306.0);
    assert!(options.validate().is_err());

    options.margins = Margins::uniform(300.0);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_negative_gap_and_dpi() {
    let mut options = options_for("photo.jpg");
    options.gap_pt = -1.0;
    assert!(options.validate().is_err());

    options.gap_pt = 0.0;
    options.raster_dpi = 0.0;
    assert!(options.validate().is_err());
}

#[test]
fn test_business_card_needs_room() {
    let mut options = options_for("card.png");
    options.mode = LayoutMode::BusinessCard;
    options.paper_size = PaperSize::Custom {
        width_pt: 500.0,
        height_pt: 792.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::A4;
    assert!(options.validate().is_ok());
}

#[test]
fn test_business_card_sheet_fits_exactly() {
    let mut options = options_for("card.png");
    options.mode = LayoutMode::BusinessCard;
    options.paper_size = PaperSize::Custom {
        width_pt: 522.0,
        height_pt: 792.0,
    };
    assert!(options.validate().is_ok());

    let plan = CompositionPlan::from_options(&options).unwrap();
    assert_eq!(plan.grid.footprint(), (522.0, 792.0));
    assert_eq!((plan.grid.origin_x, plan.grid.origin_y), (0.0, 0.0));

    options.paper_size = PaperSize::Custom {
        width_pt: 522.0,
        height_pt: 791.0,
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_allow_rotate() {
    let mut options = options_for("photo.jpg");
    assert!(!options.allow_rotate());

    options.auto_rotate = true;
    assert!(options.allow_rotate());

    options.auto_rotate = false;
    options.mode = LayoutMode::BusinessCard;
    assert!(options.allow_rotate());
}

#[cfg(feature = "serde")]
#[test]
fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = options_for("card.png");
    options.mode = LayoutMode::BusinessCard;
    options.repeats = 4;
    options.paper_size = PaperSize::Custom {
        width_pt: 600.0,
        height_pt: 800.0,
    };
    options.margins = Margins::uniform(12.5);

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).unwrap();

    let loaded = TileOptions::load(temp.path()).unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[test]
fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{ "gap_pt": 0.0, "auto_rotate": true }"#).unwrap();

    let loaded = TileOptions::load(temp.path()).unwrap();
    assert_eq!(loaded.gap_pt, 0.0);
    assert!(loaded.auto_rotate);
    assert_eq!(loaded.repeats, 1);
    assert_eq!(loaded.paper_size, PaperSize::Letter);
}

#[cfg(feature = "serde")]
#[test]
fn test_malformed_config() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "{ not json").unwrap();

    match TileOptions::load(temp.path()) {
        Err(TileError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
