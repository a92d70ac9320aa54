use std::io::Write;

use fitswap_core::config::StoreConfig;
use fitswap_core::consts::{DEFAULT_CURRENCY, PLACEHOLDER_RESULT};
use fitswap_core::{format_price, FitSwapError, ProductId};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_uses_builtin_catalog() {
    let config = StoreConfig::default();
    assert_eq!(config.currency, DEFAULT_CURRENCY);
    assert_eq!(config.placeholders.result.as_str(), PLACEHOLDER_RESULT);
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get(ProductId(3)).unwrap().price, 2480);
}

#[test]
fn test_empty_toml_falls_back_to_defaults() {
    let config = StoreConfig::from_toml_str("").unwrap();
    assert_eq!(config, StoreConfig::default());
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_custom_catalog_is_parsed_in_order() {
    let toml = r#"
currency = "USD"

[placeholders]
result = "/static/result.png"

[[catalog]]
id = 10
name = "Linen Shirt"
category = "Tops"
spec = "Ivory/L"
price = 4500

[[catalog]]
id = 4
name = "Canvas Belt"
category = "Accessories"
spec = "Tan/One Size"
price = 1200
"#;
    let config = StoreConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.currency, "USD");
    assert_eq!(config.placeholders.result.as_str(), "/static/result.png");
    // unspecified placeholders keep their defaults
    assert_eq!(
        config.placeholders.customer,
        StoreConfig::default().placeholders.customer
    );

    let ids: Vec<u32> = config.catalog().unwrap().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![10, 4]);
    assert!(config.catalog().unwrap().iter().all(|p| !p.is_selected()));
}

#[test]
fn test_duplicate_ids_are_rejected_when_building_catalog() {
    let toml = r#"
[[catalog]]
id = 1
name = "A"
category = "x"
spec = "y"
price = 1

[[catalog]]
id = 1
name = "B"
category = "x"
spec = "y"
price = 2
"#;
    let config = StoreConfig::from_toml_str(toml).unwrap();
    assert!(matches!(
        config.catalog(),
        Err(FitSwapError::DuplicateProductId(ProductId(1)))
    ));
}

#[test]
fn test_negative_price_is_a_parse_error() {
    let toml = r#"
[[catalog]]
id = 1
name = "A"
category = "x"
spec = "y"
price = -5
"#;
    assert!(matches!(
        StoreConfig::from_toml_str(toml),
        Err(FitSwapError::ConfigParse(_))
    ));
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn test_save_and_load_file() {
    let mut config = StoreConfig::default();
    config.currency = "EUR".into();
    config.catalog.truncate(2);

    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = StoreConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_reads_handwritten_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "currency = \"JPY\"").unwrap();
    let loaded = StoreConfig::load(file.path()).unwrap();
    assert_eq!(loaded.currency, "JPY");
    assert_eq!(loaded.catalog.len(), 5);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = StoreConfig::load(std::path::Path::new("/nonexistent/store.toml")).unwrap_err();
    assert!(matches!(err, FitSwapError::Io(_)));
}

#[test]
fn test_price_formatting_uses_currency_label() {
    let config = StoreConfig::default();
    assert_eq!(format_price(&config.currency, 2480), "NT$ 2,480");
}
