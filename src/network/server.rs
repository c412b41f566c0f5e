//! Сетевой сервер для ferrumdb
//!
//! Тонкая заготовка: хранит конфигурацию и обработчик запросов. Реальный
//! транспортный слой (HTTP поверх TLS) вне рамок текущей версии.

use crate::common::config::NetworkConfig;
use crate::common::error::Result;
use crate::network::handler::RequestHandler;
use crate::parser::lexer::LexerSettings;
use crate::session::SessionRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Конфигурация сервера
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_connections: usize,
    pub connection_timeout: Duration,
    pub enable_tls: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: crate::common::constants::DEFAULT_SERVER_PORT,
            max_connections: 100,
            connection_timeout: Duration::from_secs(30),
            enable_tls: false,
        }
    }
}

impl From<&NetworkConfig> for ServerConfig {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            max_connections: config.max_connections,
            ..Default::default()
        }
    }
}

/// Сервер базы данных
pub struct Server {
    config: ServerConfig,
    handler: RequestHandler,
    registry: Arc<SessionRegistry>,
}

impl Server {
    /// Создает сервер с внедренным реестром сессий
    pub fn new(
        config: ServerConfig,
        registry: Arc<SessionRegistry>,
        lexer_settings: LexerSettings,
    ) -> Result<Self> {
        let handler = RequestHandler::new(Arc::clone(&registry), lexer_settings);
        Ok(Self {
            config,
            handler,
            registry,
        })
    }

    /// Возвращает адрес прослушивания
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Возвращает обработчик запросов
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Останавливает сервер, закрывая все сессии
    pub fn shutdown(&self) {
        log::info!("server on {} shutting down", self.listen_addr());
        self.registry.clear();
    }
}
