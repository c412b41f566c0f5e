//! Тесты для парсера SQL ferrumdb

use crate::common::error::Error;
use crate::parser::ast::SqlCommand;
use crate::parser::parser::SqlParser;

#[test]
fn test_parse_select() {
    let mut parser = SqlParser::new("select * from dual").unwrap();
    let command = parser.parse().unwrap();
    assert!(matches!(command, SqlCommand::Query(_)));
}

#[test]
fn test_parse_with_query() {
    let mut parser = SqlParser::new("with x as (select * from dual) select * from x").unwrap();
    let command = parser.parse().unwrap();
    assert!(matches!(command, SqlCommand::Query(_)));
}

#[test]
fn test_parse_skips_leading_hint() {
    let mut parser = SqlParser::new("/*+ INDEX(t) */ select * from t").unwrap();
    let command = parser.parse().unwrap();
    assert!(matches!(command, SqlCommand::Query(_)));
}

#[test]
fn test_parse_unsupported_statement() {
    let mut parser = SqlParser::new("insert into t values (1)").unwrap();
    match parser.parse() {
        Err(Error::Unsupported { operation }) => assert!(operation.contains("INSERT")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_unrecognized_keyword() {
    let mut parser = SqlParser::new("frobnicate the database").unwrap();
    assert!(matches!(parser.parse(), Err(Error::SqlParsing { .. })));
}

#[test]
fn test_parse_empty_statement() {
    let mut parser = SqlParser::new("  /* only a comment */  ").unwrap();
    assert!(matches!(parser.parse(), Err(Error::SqlParsing { .. })));
}

#[test]
fn test_parse_statement_starting_with_number() {
    let mut parser = SqlParser::new("42 select").unwrap();
    assert!(matches!(parser.parse(), Err(Error::SqlParsing { .. })));
}

#[test]
fn test_lex_error_propagates() {
    match SqlParser::new("'unclosed") {
        Err(Error::Lexical(_)) => {}
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_tokens_are_exposed() {
    let parser = SqlParser::new("select 1").unwrap();
    assert_eq!(parser.tokens().len(), 2);
}
