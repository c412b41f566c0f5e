//! CLI интерфейс для ferrumdb
//!
//! Предоставляет командную строку для запуска сервера и работы с конвейером
//! разбора SQL

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FerrumDB - лексический фронтенд SQL движка на Rust
#[derive(Parser)]
#[command(name = "ferrumdb")]
#[command(about = "FerrumDB - SQL lexical front end in Rust")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Сохранять обычные комментарии как токены
    #[arg(long)]
    pub retain_comments: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Запустить сервер базы данных
    Server {
        /// Порт для прослушивания
        #[arg(short, long, default_value_t = crate::common::constants::DEFAULT_SERVER_PORT)]
        port: u16,

        /// Хост для прослушивания
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Разбить SQL текст на токены
    Tokenize {
        /// SQL текст для анализа
        sql: String,
    },

    /// Разобрать SQL оператор
    Query {
        /// SQL запрос для разбора
        sql: String,
    },

    /// Показать информацию о системе
    Info,
}
