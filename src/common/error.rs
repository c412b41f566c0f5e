//! Обработка ошибок для ferrumdb

use thiserror::Error;

/// Максимальная длина фрагмента текста в сообщении лексической ошибки
pub const INVALID_TEXT_PREVIEW_LEN: usize = 30;

/// Лексическая ошибка
///
/// Любая лексическая ошибка терминальна для вызова: лексер не возвращает
/// частичную последовательность токенов вместе с ошибкой.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Блочный комментарий или хинт не закрыт до конца входного текста
    #[error("unclosed comment at end of input")]
    UnclosedComment,

    /// Кавычка (одинарная, двойная, скобочная, back-tick, $tag$, q'') не закрыта
    #[error("unclosed quote at end of input")]
    UnclosedQuote,

    /// Текущая позиция не распознана ни одним из распознавателей
    #[error("invalid SQL text found near: {preview}")]
    InvalidText { preview: String },
}

impl LexError {
    /// Создает ошибку нераспознанного текста с ограниченным фрагментом
    pub fn invalid_text(rest: &str) -> Self {
        let preview = rest.chars().take(INVALID_TEXT_PREVIEW_LEN).collect();
        Self::InvalidText { preview }
    }
}

/// Основной тип ошибки для ferrumdb
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),

    /// Ошибка парсинга SQL
    #[error("SQL parsing error: {message}")]
    SqlParsing { message: String },

    /// Ошибка сети
    #[error("Network error: {message}")]
    Network { message: String },

    /// Ошибка сессии
    #[error("Session error: {message}")]
    Session { message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Неподдерживаемая операция
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для ferrumdb
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку SQL парсинга
    pub fn sql_parsing(message: impl Into<String>) -> Self {
        Self::SqlParsing {
            message: message.into(),
        }
    }

    /// Создает ошибку сети
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Создает ошибку сессии
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку неподдерживаемой операции
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
