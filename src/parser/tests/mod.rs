//! Тесты парсера и лексера ferrumdb

pub mod parser_tests;
