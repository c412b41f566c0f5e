//! Сетевой фронтенд для ferrumdb

pub mod handler;
pub mod server;

#[cfg(test)]
pub mod tests;

pub use handler::{RequestHandler, SqlRequest, SqlResponse, TokenInfo};
pub use server::{Server, ServerConfig};
