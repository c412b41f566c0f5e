//! Лексический анализатор SQL для ferrumdb
//!
//! Преобразует входной SQL текст в последовательность токенов для дальнейшего парсинга.
//! Реализован как посимвольный конечный автомат с фиксированным порядком
//! распознавателей: хинты, комментарии, строки в долларовых маркерах, q-строки,
//! строки в одинарных кавычках, идентификаторы в двойных кавычках и скобках,
//! back-tick строки, числовые литералы, идентификаторы и пунктуация.

use crate::common::config::LexerConfig;
use crate::common::constants::PUNCTUATION_CHARS;
use crate::common::error::LexError;
use crate::parser::token::{Position, Token, TokenKind, Tokens};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Результат лексического анализа
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Настройки лексического анализатора
#[derive(Debug, Clone, Default)]
pub struct LexerSettings {
    /// Сохранять ли обычные комментарии как токены Comment
    pub retain_comments: bool,
}

impl From<&LexerConfig> for LexerSettings {
    fn from(config: &LexerConfig) -> Self {
        Self {
            retain_comments: config.retain_comments,
        }
    }
}

/// Лексический анализатор SQL
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для отображения ошибок
    current_position: Position,
    /// Настройки анализатора
    settings: LexerSettings,
}

impl Lexer {
    /// Создает новый лексический анализатор с настройками по умолчанию
    pub fn new(input: &str) -> Self {
        Self::with_settings(input, LexerSettings::default())
    }

    /// Создает лексический анализатор с настройками
    pub fn with_settings(input: &str, settings: LexerSettings) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
            settings,
        }
    }
}

/// Преобразует входной SQL текст в последовательность токенов
///
/// Чистая функция: результат определяется только входным текстом, состояние
/// между вызовами не сохраняется.
pub fn tokenize(input: &str) -> LexResult<Tokens> {
    Lexer::new(input).tokenize()
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
