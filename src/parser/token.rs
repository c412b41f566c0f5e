//! Токены для SQL лексера ferrumdb
//!
//! Определяет все типы токенов, которые может произвести лексический анализатор,
//! включая идентификаторы, строковые литералы, числа, пунктуацию и хинты.

use bigdecimal::BigDecimal;
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Идентификатор или ключевое слово (без кавычек — в верхнем регистре)
    Identifier,

    /// Строковый литерал (содержимое с сохранением регистра)
    StringLiteral,

    /// Одиночный символ пунктуации
    Punctuation,

    /// Числовой литерал произвольной точности
    Number,

    /// Хинт оптимизатора (`/*+ ... */` или `--+ ...`)
    Hint,

    /// Обычный комментарий; выдается только при включенном сохранении
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Number => "NUMBER",
            TokenKind::Hint => "HINT",
            TokenKind::Comment => "COMMENT",
        };
        write!(f, "{}", name)
    }
}

/// Значение токена
///
/// Числа хранятся как десятичные значения произвольной точности: литералы
/// до 64000 значащих цифр представимы без округления.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(BigDecimal),
}

impl TokenValue {
    /// Возвращает текстовое значение, если токен текстовый
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            TokenValue::Number(_) => None,
        }
    }

    /// Возвращает числовое значение, если токен числовой
    pub fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            TokenValue::Text(_) => None,
            TokenValue::Number(n) => Some(n),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{}", s),
            TokenValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Токен с типом, значением и позицией
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }

    /// Создает текстовый токен
    pub fn text(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        Self::new(kind, TokenValue::Text(value.into()), position)
    }

    /// Создает числовой токен
    pub fn number(value: BigDecimal, position: Position) -> Self {
        Self::new(TokenKind::Number, TokenValue::Number(value), position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.kind, self.value, self.position)
    }
}

/// Упорядоченная последовательность токенов одного вызова лексера
pub type Tokens = Vec<Token>;
