//! Тесты обработчика SQL запросов

use crate::common::config::SessionConfig;
use crate::common::error::Error;
use crate::network::handler::{RequestHandler, SqlResponse};
use crate::parser::lexer::LexerSettings;
use crate::session::SessionRegistry;
use std::sync::Arc;
use uuid::Uuid;

fn handler() -> (RequestHandler, Arc<SessionRegistry>) {
    let registry = Arc::new(SessionRegistry::new(&SessionConfig::default()));
    let handler = RequestHandler::new(Arc::clone(&registry), LexerSettings::default());
    (handler, registry)
}

#[test]
fn test_handle_sql_success() {
    let (handler, _registry) = handler();

    let body = r#"{"sql": "select 1"}"#;
    let response: SqlResponse = serde_json::from_str(&handler.handle_sql(body).unwrap()).unwrap();

    assert!(response.ok);
    assert!(response.error.is_none());

    let tokens = response.tokens.unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, "IDENTIFIER");
    assert_eq!(tokens[0].value, "SELECT");
    assert_eq!(tokens[1].kind, "NUMBER");
}

#[test]
fn test_handle_sql_lexical_error_in_response() {
    let (handler, _registry) = handler();

    let body = r#"{"sql": "'unclosed"}"#;
    let response: SqlResponse = serde_json::from_str(&handler.handle_sql(body).unwrap()).unwrap();

    assert!(!response.ok);
    assert!(response.tokens.is_none());
    assert!(response.error.unwrap().contains("unclosed quote"));
}

#[test]
fn test_handle_sql_with_known_session() {
    let (handler, registry) = handler();
    let id = registry.create("alice", 7);

    let body = format!(r#"{{"sql": "select 1", "session_id": "{}"}}"#, id);
    let response: SqlResponse = serde_json::from_str(&handler.handle_sql(&body).unwrap()).unwrap();
    assert!(response.ok);
}

#[test]
fn test_handle_sql_with_unknown_session() {
    let (handler, _registry) = handler();

    let body = format!(r#"{{"sql": "select 1", "session_id": "{}"}}"#, Uuid::new_v4());
    assert!(matches!(
        handler.handle_sql(&body),
        Err(Error::Session { .. })
    ));
}

#[test]
fn test_handle_sql_malformed_body() {
    let (handler, _registry) = handler();
    assert!(matches!(
        handler.handle_sql("not json at all"),
        Err(Error::Serialization(_))
    ));
}
