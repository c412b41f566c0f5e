//! Сессии пользователей для ferrumdb

pub mod registry;

#[cfg(test)]
pub mod tests;

pub use registry::{Session, SessionRegistry};
