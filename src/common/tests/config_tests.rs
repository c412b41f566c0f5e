//! Тесты конфигурации

use crate::common::config::DatabaseConfig;
use crate::common::error::{LexError, INVALID_TEXT_PREVIEW_LEN};

#[test]
fn test_default_config() {
    let config = DatabaseConfig::default();
    assert!(!config.lexer.retain_comments);
    assert_eq!(config.network.port, 9422);
    assert_eq!(config.session.max_idle_secs, 1800);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_from_toml() {
    let text = r#"
        name = "testdb"

        [lexer]
        retain_comments = true

        [network]
        host = "127.0.0.1"
        port = 9000
        max_connections = 10
    "#;

    let config: DatabaseConfig = toml::from_str(text).unwrap();
    assert_eq!(config.name, "testdb");
    assert!(config.lexer.retain_comments);
    assert_eq!(config.network.port, 9000);
    // секции без значений заполняются по умолчанию
    assert_eq!(config.session.max_idle_secs, 1800);
}

#[test]
fn test_invalid_text_preview_truncation() {
    let err = LexError::invalid_text(&"x".repeat(100));
    match err {
        LexError::InvalidText { preview } => {
            assert_eq!(preview.chars().count(), INVALID_TEXT_PREVIEW_LEN)
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
