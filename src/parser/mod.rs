//! Парсер SQL для ferrumdb

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use ast::*;
pub use lexer::{tokenize, LexResult, Lexer, LexerSettings};
pub use parser::SqlParser;
pub use token::{Position, Token, TokenKind, TokenValue, Tokens};
