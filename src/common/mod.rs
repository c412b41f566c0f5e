//! Общие типы и утилиты для ferrumdb

pub mod config;
pub mod constants;
pub mod error;

#[cfg(test)]
pub mod tests;

pub use config::*;
pub use constants::*;
pub use error::{Error, LexError, Result};
