//! Парсер SQL для ferrumdb
//!
//! Диспетчеризация операторов по первому значащему токену. Полная грамматика
//! операторов еще не реализована: SELECT/WITH дают скелетный блок запроса,
//! остальные операторы явно сообщают о неподдерживаемой операции.

use crate::common::error::{Error, Result};
use crate::parser::ast::{Query, QueryBlock, SqlCommand};
use crate::parser::lexer::{Lexer, LexerSettings};
use crate::parser::token::{TokenKind, Tokens};

/// Операторы, известные движку, но еще не реализованные парсером
const UNSUPPORTED_STATEMENTS: &[&str] = &[
    "INSERT", "UPDATE", "UPSERT", "MERGE", "DELETE", "CREATE", "ALTER", "DROP", "GRANT", "REVOKE",
    "COMMENT", "BEGIN", "DECLARE", "START", "COMMIT", "SAVEPOINT", "ROLLBACK",
];

/// Парсер SQL операторов
pub struct SqlParser {
    tokens: Tokens,
}

impl SqlParser {
    /// Создает новый парсер, пропуская входной текст через лексер
    pub fn new(input: &str) -> Result<Self> {
        Self::with_settings(input, LexerSettings::default())
    }

    /// Создает парсер с настройками лексера
    pub fn with_settings(input: &str, settings: LexerSettings) -> Result<Self> {
        let tokens = Lexer::with_settings(input, settings).tokenize()?;
        Ok(Self { tokens })
    }

    /// Возвращает последовательность токенов, полученную от лексера
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Разбирает SQL оператор
    pub fn parse(&mut self) -> Result<SqlCommand> {
        // Хинты адресованы планировщику и на выбор оператора не влияют
        let first = self
            .tokens
            .iter()
            .find(|t| t.kind != TokenKind::Hint && t.kind != TokenKind::Comment)
            .ok_or_else(|| Error::sql_parsing("empty statement"))?;

        if first.kind != TokenKind::Identifier {
            return Err(Error::sql_parsing(format!(
                "expected statement keyword, found {}",
                first
            )));
        }

        let keyword = match first.value.as_text() {
            Some(text) => text,
            None => {
                return Err(Error::sql_parsing(format!(
                    "expected statement keyword, found {}",
                    first
                )))
            }
        };

        match keyword {
            "SELECT" | "WITH" => {
                log::debug!("parsing query statement ({} tokens)", self.tokens.len());
                Ok(SqlCommand::Query(Query {
                    blocks: vec![QueryBlock::default()],
                }))
            }
            kw if UNSUPPORTED_STATEMENTS.contains(&kw) => {
                Err(Error::unsupported(format!("{} statement", kw)))
            }
            other => Err(Error::sql_parsing(format!(
                "unrecognized statement keyword: {}",
                other
            ))),
        }
    }
}
