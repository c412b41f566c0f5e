//! Тесты общих компонентов ferrumdb

pub mod config_tests;
