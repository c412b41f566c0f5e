//! ferrumdb - Лексический фронтенд реляционной базы данных на Rust
//!
//! Ядро крейта — посимвольный лексический анализатор SQL: перекрывающиеся
//! формы кавычек, вложенные комментарии, хинты оптимизатора, Unicode
//! идентификаторы и числовые литералы произвольной точности. Сетевой
//! фронтенд, сессии и грамматика операторов — тонкие заготовки вокруг него.

pub mod cli;
pub mod common;
pub mod network;
pub mod parser;
pub mod session;

pub use common::error::{Error, LexError, Result};
pub use parser::{tokenize, Token, TokenKind, TokenValue, Tokens};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
