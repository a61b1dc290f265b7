use dse_dom::Theme;
use dse_foundation::{DefaultTheme, FontSize, Spacing};

// ============================================================================
// FontSize
// ============================================================================

#[test]
fn test_font_size_default_is_base() {
    assert_eq!(FontSize::default(), FontSize::Base);
    assert_eq!(FontSize::default().as_str(), "base");
}

#[test]
fn test_font_size_names() {
    let names: Vec<&str> = FontSize::ALL.iter().map(FontSize::as_str).collect();
    assert_eq!(names, vec!["xs", "sm", "base", "lg", "xl", "xxl", "xxxl"]);
}

#[test]
fn test_font_size_maps_to_weight() {
    assert!(FontSize::Xs.text_style().dim);
    assert!(!FontSize::Base.text_style().bold);
    assert!(!FontSize::Base.text_style().dim);
    assert!(FontSize::Xxl.text_style().bold);
}

#[test]
fn test_font_size_serde_uses_token_name() {
    let json = serde_json::to_string(&FontSize::Xxl).unwrap();
    assert_eq!(json, "\"xxl\"");
    let parsed: FontSize = serde_json::from_str("\"sm\"").unwrap();
    assert_eq!(parsed, FontSize::Sm);
}

// ============================================================================
// Spacing
// ============================================================================

#[test]
fn test_spacing_scale_is_monotonic() {
    let cells: Vec<u16> = Spacing::ALL.iter().map(Spacing::cells).collect();
    assert!(cells.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(Spacing::None.cells(), 0);
}

#[test]
fn test_spacing_display_matches_as_str() {
    for space in Spacing::ALL {
        assert_eq!(space.to_string(), space.as_str());
    }
    assert_eq!(Spacing::Lg.to_string(), "lg");
}

#[test]
fn test_spacing_deserializes_from_name() {
    let parsed: Vec<Spacing> = serde_json::from_str(r#"["none", "md", "xxxl"]"#).unwrap();
    assert_eq!(parsed, vec![Spacing::None, Spacing::Md, Spacing::Xxxl]);
    assert!(serde_json::from_str::<Spacing>("\"huge\"").is_err());
}

// ============================================================================
// DefaultTheme
// ============================================================================

#[test]
fn test_default_theme_resolves_every_name() {
    let theme = DefaultTheme::default();
    for name in DefaultTheme::NAMES {
        assert!(theme.resolve(name).is_some(), "{name} should resolve");
    }
    assert!(theme.resolve("unknown_color").is_none());
}

#[test]
fn test_default_theme_aliases() {
    let theme = DefaultTheme::dark();
    assert_eq!(theme.resolve("fg"), Some(theme.foreground));
    assert_eq!(theme.resolve("bg"), Some(theme.background));
}

#[test]
fn test_light_and_dark_differ() {
    assert_ne!(DefaultTheme::light(), DefaultTheme::dark());
}
