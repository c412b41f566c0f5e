//! Реестр сессий для ferrumdb
//!
//! Явный объект реестра с определенным жизненным циклом вместо глобального
//! состояния: реестр создается при старте сервера и внедряется в обработчик
//! запросов. Лексер о сессиях не знает.

use crate::common::config::SessionConfig;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Сессия пользователя
#[derive(Debug, Clone)]
pub struct Session {
    /// Уникальный идентификатор сессии
    pub session_id: Uuid,
    /// Имя пользователя сессии
    pub username: String,
    /// Ключ авторизации; несколько сессий могут разделять один ключ
    pub auth_key: u64,
    /// Момент создания сессии
    initialized: Instant,
    /// Последняя активность сессии
    last_active: Instant,
    /// Допустимое время простоя
    max_idle_time: Duration,
}

impl Session {
    fn new(username: String, auth_key: u64, max_idle_time: Duration) -> Self {
        let now = Instant::now();
        Self {
            session_id: Uuid::new_v4(),
            username,
            auth_key,
            initialized: now,
            last_active: now,
            max_idle_time,
        }
    }

    /// Возвращает время с момента создания сессии
    pub fn age(&self) -> Duration {
        self.initialized.elapsed()
    }

    /// Возвращает время простоя сессии
    pub fn idle(&self) -> Duration {
        self.last_active.elapsed()
    }

    /// Проверяет, превышено ли допустимое время простоя
    pub fn is_expired(&self) -> bool {
        self.idle() >= self.max_idle_time
    }
}

/// Реестр активных сессий
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Session>,
    max_idle_time: Duration,
}

impl SessionRegistry {
    /// Создает пустой реестр сессий
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            max_idle_time: Duration::from_secs(config.max_idle_secs),
        }
    }

    /// Создает новую сессию и возвращает ее идентификатор
    pub fn create(&self, username: impl Into<String>, auth_key: u64) -> Uuid {
        let session = Session::new(username.into(), auth_key, self.max_idle_time);
        let id = session.session_id;
        log::info!("session {} created for user {}", id, session.username);
        self.sessions.insert(id, session);
        id
    }

    /// Возвращает сессию по идентификатору, обновляя время последней активности
    pub fn get(&self, id: Uuid) -> Option<Session> {
        let mut entry = self.sessions.get_mut(&id)?;
        entry.last_active = Instant::now();
        Some(entry.clone())
    }

    /// Обновляет время последней активности сессии
    pub fn touch(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Удаляет сессию из реестра
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Удаляет сессии с превышенным временем простоя; возвращает их количество
    ///
    /// Количество считается внутри обхода: разница длин до и после не
    /// годится, так как параллельные вставки меняют длину между замерами.
    pub fn expire_idle(&self) -> usize {
        let mut expired = 0;
        self.sessions.retain(|_, session| {
            if session.is_expired() {
                expired += 1;
                false
            } else {
                true
            }
        });
        if expired > 0 {
            log::debug!("expired {} idle sessions", expired);
        }
        expired
    }

    /// Возвращает количество активных сессий
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Проверяет, пуст ли реестр
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Завершает все сессии (остановка сервера)
    pub fn clear(&self) {
        log::info!("closing {} active sessions", self.sessions.len());
        self.sessions.clear();
    }
}
