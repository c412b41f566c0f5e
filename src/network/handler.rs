//! Обработчик SQL запросов для ferrumdb
//!
//! Декодирует тело входящего запроса в текстовый буфер и передает его в
//! конвейер разбора. Транспортный слой (HTTP) подключит этот обработчик
//! позднее; сам обработчик от транспорта не зависит.

use crate::common::error::{Error, Result};
use crate::parser::lexer::{Lexer, LexerSettings};
use crate::parser::token::{Token, TokenValue, Tokens};
use crate::session::SessionRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Тело SQL запроса
#[derive(Debug, Deserialize)]
pub struct SqlRequest {
    /// SQL текст: один или несколько операторов либо процедурный блок
    pub sql: String,
    /// Идентификатор сессии; проверяется обработчиком, но не лексером
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Ответ на SQL запрос
#[derive(Debug, Serialize, Deserialize)]
pub struct SqlResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Токен в сериализуемом виде
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenInfo {
    pub kind: String,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenInfo {
    fn from(token: &Token) -> Self {
        let value = match &token.value {
            TokenValue::Text(s) => s.clone(),
            TokenValue::Number(n) => n.to_string(),
        };
        Self {
            kind: token.kind.to_string(),
            value,
            line: token.position.line,
            column: token.position.column,
        }
    }
}

impl SqlResponse {
    fn success(tokens: &Tokens) -> Self {
        Self {
            ok: true,
            tokens: Some(tokens.iter().map(TokenInfo::from).collect()),
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            ok: false,
            tokens: None,
            error: Some(message),
        }
    }
}

/// Обработчик входящих SQL запросов
pub struct RequestHandler {
    registry: Arc<SessionRegistry>,
    lexer_settings: LexerSettings,
}

impl RequestHandler {
    /// Создает обработчик с внедренным реестром сессий
    pub fn new(registry: Arc<SessionRegistry>, lexer_settings: LexerSettings) -> Self {
        Self {
            registry,
            lexer_settings,
        }
    }

    /// Обрабатывает тело SQL запроса и возвращает JSON ответ
    ///
    /// Лексическая ошибка — часть нормального ответа (ok = false); ошибкой
    /// обработчика считаются только некорректное тело запроса и неизвестная
    /// сессия.
    pub fn handle_sql(&self, body: &str) -> Result<String> {
        let request: SqlRequest = serde_json::from_str(body)?;

        if let Some(id) = request.session_id {
            if !self.registry.touch(id) {
                return Err(Error::session(format!("unknown session: {}", id)));
            }
        }

        log::debug!("handling sql request ({} chars)", request.sql.chars().count());

        let response =
            match Lexer::with_settings(&request.sql, self.lexer_settings.clone()).tokenize() {
                Ok(tokens) => SqlResponse::success(&tokens),
                Err(e) => SqlResponse::failure(e.to_string()),
            };

        Ok(serde_json::to_string(&response)?)
    }
}
