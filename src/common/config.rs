//! Конфигурация для ferrumdb
//!
//! Предоставляет структуры конфигурации для различных компонентов системы

use crate::common::constants::{DEFAULT_SERVER_PORT, DEFAULT_SESSION_IDLE_SECS};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Основная конфигурация базы данных
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Имя базы данных
    pub name: String,
    /// Конфигурация лексера
    #[serde(default)]
    pub lexer: LexerConfig,
    /// Конфигурация сети
    #[serde(default)]
    pub network: NetworkConfig,
    /// Конфигурация сессий
    #[serde(default)]
    pub session: SessionConfig,
    /// Конфигурация логирования
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DatabaseConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::configuration(e.to_string()))
    }
}

/// Конфигурация лексера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Сохранять ли обычные комментарии как токены
    ///
    /// По умолчанию комментарии отбрасываются; инструментам форматирования
    /// может понадобиться их сохранение.
    pub retain_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            retain_comments: false,
        }
    }
}

/// Конфигурация сети
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Хост для прослушивания
    pub host: String,
    /// Порт для прослушивания
    pub port: u16,
    /// Максимальное количество подключений
    pub max_connections: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_SERVER_PORT,
            max_connections: 1000,
        }
    }
}

/// Конфигурация сессий
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Допустимое время простоя сессии (в секундах)
    pub max_idle_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
