//! Тесты реестра сессий

use crate::common::config::SessionConfig;
use crate::session::SessionRegistry;
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

fn registry() -> SessionRegistry {
    SessionRegistry::new(&SessionConfig::default())
}

#[test]
fn test_create_and_get() {
    let registry = registry();
    let id = registry.create("alice", 42);

    let session = registry.get(id).unwrap();
    assert_eq!(session.session_id, id);
    assert_eq!(session.username, "alice");
    assert_eq!(session.auth_key, 42);
    assert!(!session.is_expired());
    // возраст не меньше простоя: активность обновляется, создание — нет
    assert!(session.age() >= session.idle());
}

#[test]
fn test_get_unknown_session() {
    let registry = registry();
    assert!(registry.get(Uuid::new_v4()).is_none());
}

#[test]
fn test_touch() {
    let registry = registry();
    let id = registry.create("alice", 1);

    assert!(registry.touch(id));
    assert!(!registry.touch(Uuid::new_v4()));
}

#[test]
fn test_remove() {
    let registry = registry();
    let id = registry.create("alice", 1);

    assert!(registry.remove(id));
    assert!(!registry.remove(id));
    assert!(registry.get(id).is_none());
}

#[test]
fn test_shared_auth_key_allows_multiple_sessions() {
    let registry = registry();
    let first = registry.create("alice", 7);
    let second = registry.create("alice", 7);

    assert_ne!(first, second);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_expire_idle() {
    // нулевое допустимое время простоя: сессия истекает немедленно
    let registry = SessionRegistry::new(&SessionConfig { max_idle_secs: 0 });
    registry.create("alice", 1);
    registry.create("bob", 2);

    assert_eq!(registry.expire_idle(), 2);
    assert!(registry.is_empty());
}

#[test]
fn test_expire_idle_concurrent_with_create() {
    // вставки во время обхода не должны искажать счетчик удаленных сессий
    let registry = Arc::new(registry());

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..1000 {
                registry.create("alice", i);
            }
        })
    };

    while !writer.is_finished() {
        assert_eq!(registry.expire_idle(), 0);
    }
    writer.join().unwrap();

    assert_eq!(registry.expire_idle(), 0);
    assert_eq!(registry.len(), 1000);
}

#[test]
fn test_expire_idle_keeps_active_sessions() {
    let registry = registry();
    registry.create("alice", 1);

    assert_eq!(registry.expire_idle(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_clear() {
    let registry = registry();
    registry.create("alice", 1);
    registry.create("bob", 2);

    registry.clear();
    assert!(registry.is_empty());
}
