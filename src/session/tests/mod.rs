//! Тесты реестра сессий ferrumdb

pub mod registry_tests;
