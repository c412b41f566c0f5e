//! Главный исполняемый файл FerrumDB

use anyhow::Result;
use clap::Parser;
use ferrumdb::cli::{Cli, Commands};
use ferrumdb::common::config::DatabaseConfig;
use ferrumdb::common::constants::{MAX_NUMBER_DIGITS, MAX_TEXT_LENGTH};
use ferrumdb::network::{Server, ServerConfig};
use ferrumdb::parser::{Lexer, LexerSettings, SqlParser};
use ferrumdb::session::SessionRegistry;
use ferrumdb::VERSION;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DatabaseConfig::from_file(path)?,
        None => DatabaseConfig::default(),
    };
    if cli.retain_comments {
        config.lexer.retain_comments = true;
    }

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&level)).init();

    let lexer_settings = LexerSettings::from(&config.lexer);

    match &cli.command {
        Some(Commands::Server { port, host }) => {
            let registry = Arc::new(SessionRegistry::new(&config.session));
            let server_config = ServerConfig {
                host: host.clone(),
                port: *port,
                ..ServerConfig::from(&config.network)
            };
            let server = Server::new(server_config, registry, lexer_settings)?;
            println!("Сервер готов на {}", server.listen_addr());
            // TODO: подключить HTTP транспорт к Server::handler
            server.shutdown();
        }
        Some(Commands::Tokenize { sql }) => {
            let tokens = Lexer::with_settings(sql, lexer_settings).tokenize()?;
            for token in &tokens {
                println!("{}", token);
            }
        }
        Some(Commands::Query { sql }) => {
            let mut parser = SqlParser::with_settings(sql, lexer_settings)?;
            let command = parser.parse()?;
            println!("{:?}", command);
        }
        Some(Commands::Info) | None => {
            println!("FerrumDB v{}", VERSION);
            println!("Числовые литералы: до {} значащих цифр", MAX_NUMBER_DIGITS);
            println!("Текстовые поля: до {} символов", MAX_TEXT_LENGTH);
        }
    }

    Ok(())
}
