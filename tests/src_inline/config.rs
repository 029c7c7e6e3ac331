use super::*;
use crate::model::labels::NamePredicate;

#[test]
fn test_default_config_matches_builtin_methods() {
    let config = AnalysisConfig::default();
    assert_eq!(config.id_column, "Name");
    assert_eq!(config.method_names(), vec!["Vina", "PLANET", "Autodock-gpu"]);
    assert_eq!(config.methods[0].line_style, LineStyle::Dashed);
    assert_eq!(config.methods[2].line_style, LineStyle::DashDot);
    assert_eq!(config.ttest, TTestVariant::Student);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_partial_json_uses_defaults() {
    let text = r##"{
        "id_column": "Compound",
        "methods": [
            {"name": "Glide", "color": "#ff8800", "line_style": "--"},
            {"name": "Vina", "color": "purple", "line_style": "solid"}
        ],
        "ttest": "welch"
    }"##;
    let config = AnalysisConfig::from_json_str(text, Path::new("cfg.json")).unwrap();
    assert_eq!(config.id_column, "Compound");
    assert_eq!(config.methods[0].color, Color::rgb(255, 136, 0));
    assert_eq!(config.methods[0].line_style, LineStyle::Dashed);
    assert_eq!(config.methods[1].color, Color::rgb(128, 0, 128));
    assert_eq!(config.ttest, TTestVariant::Welch);
    assert_eq!(
        config.label_rule.active,
        NamePredicate::StartsWith("CHEMBL".to_string())
    );
}

#[test]
fn test_rejects_duplicate_methods() {
    let text = r#"{"methods": [
        {"name": "Vina", "color": "blue", "line_style": "solid"},
        {"name": "Vina", "color": "red", "line_style": "solid"}
    ]}"#;
    let err = AnalysisConfig::from_json_str(text, Path::new("cfg.json")).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateMethod(ref m) if m == "Vina"));
}

#[test]
fn test_rejects_empty_method_list() {
    let err = AnalysisConfig::from_json_str(r#"{"methods": []}"#, Path::new("cfg.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::NoMethods));
}

#[test]
fn test_rejects_bad_color() {
    let text = r##"{"methods": [{"name": "Vina", "color": "#12", "line_style": "solid"}]}"##;
    let err = AnalysisConfig::from_json_str(text, Path::new("cfg.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(Color::parse("chartreuse").is_err());
}

#[test]
fn test_with_method_names_keeps_known_styles() {
    let config = AnalysisConfig::default()
        .with_method_names(&["PLANET".to_string(), "Gnina".to_string()]);
    assert_eq!(config.method_names(), vec!["PLANET", "Gnina"]);
    assert_eq!(config.methods[0].color, Color::rgb(0, 128, 0));
    assert_eq!(config.methods[1], MethodStyle::from_palette("Gnina", 1));
}

#[test]
fn test_color_hex_roundtrip() {
    assert_eq!(Color::rgb(0, 128, 255).to_hex(), "#0080ff");
    assert_eq!(Color::parse("#0080FF").unwrap(), Color::rgb(0, 128, 255));
}
