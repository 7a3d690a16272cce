use doorquotelib::config::{QuoteConfig, DEFAULT_STORE};
use doorquotelib::error::QuoteError;
use doorquotelib::model::PricingMode;
use doorquotelib::pricing::RateTable;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn empty_config_uses_defaults() {
    let cfg = QuoteConfig::from_toml_str("").expect("parse empty");
    assert_eq!(cfg, QuoteConfig::default());
    assert_eq!(cfg.rates, RateTable::default());
    assert_eq!(cfg.mode, PricingMode::AllKinds);
    assert_eq!(cfg.store, PathBuf::from(DEFAULT_STORE));
}

#[test]
fn partial_rate_table_keeps_other_defaults() {
    let cfg = QuoteConfig::from_toml_str(
        r#"
mode = "selected"
store = "shop.csv"

[rates]
single = 165
laminate = 240.5
"#,
    )
    .expect("parse config");
    assert_eq!(cfg.mode, PricingMode::Selected);
    assert_eq!(cfg.store, PathBuf::from("shop.csv"));
    assert_eq!(cfg.rates.single, Decimal::from(165));
    assert_eq!(cfg.rates.laminate, Decimal::from_str_exact("240.5").unwrap());
    assert_eq!(cfg.rates.double, Decimal::from(220));
}

#[test]
fn rejects_unknown_coating_and_bad_rates() {
    let unknown = QuoteConfig::from_toml_str("[rates]\nvarnish = 100\n");
    assert!(matches!(unknown, Err(QuoteError::Config(_))));

    let zero = QuoteConfig::from_toml_str("[rates]\nsingle = 0\n");
    assert!(matches!(zero, Err(QuoteError::Config(_))));
}

#[test]
fn config_file_roundtrip() {
    let cfg = QuoteConfig {
        rates: RateTable::legacy(),
        mode: PricingMode::Selected,
        store: PathBuf::from("legacy.csv"),
    };
    let text = cfg.to_toml_string().expect("to toml");

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).unwrap();
    let back = QuoteConfig::from_file(file.path()).expect("from file");
    assert_eq!(back, cfg);
}
