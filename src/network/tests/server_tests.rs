//! Тесты сервера

use crate::common::config::{NetworkConfig, SessionConfig};
use crate::network::server::{Server, ServerConfig};
use crate::parser::lexer::LexerSettings;
use crate::session::SessionRegistry;
use std::sync::Arc;

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9422);
    assert!(!config.enable_tls);
}

#[test]
fn test_server_config_from_network_config() {
    let network = NetworkConfig {
        host: "10.0.0.1".to_string(),
        port: 1234,
        max_connections: 5,
    };
    let config = ServerConfig::from(&network);
    assert_eq!(config.host, "10.0.0.1");
    assert_eq!(config.port, 1234);
    assert_eq!(config.max_connections, 5);
}

#[test]
fn test_server_listen_addr_and_shutdown() {
    let registry = Arc::new(SessionRegistry::new(&SessionConfig::default()));
    registry.create("bob", 1);

    let server = Server::new(
        ServerConfig::default(),
        Arc::clone(&registry),
        LexerSettings::default(),
    )
    .unwrap();

    assert_eq!(server.listen_addr(), "127.0.0.1:9422");

    server.shutdown();
    assert!(registry.is_empty());
}
