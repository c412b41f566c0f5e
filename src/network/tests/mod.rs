//! Тесты сетевого фронтенда ferrumdb

pub mod handler_tests;
pub mod server_tests;
