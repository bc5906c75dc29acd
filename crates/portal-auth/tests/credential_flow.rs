//! End-to-end credential flows against the SQLite backend.

use std::path::{Path, PathBuf};

use portal_auth::store::{CURRENT_USER_KEY, USERS_KEY};
use portal_auth::{AuthError, CredentialStore};
use portal_db::{KeyValueStore, SqliteStore};

fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("portal-auth-{}.db", uuid::Uuid::new_v4()))
}

fn cleanup(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}

#[test]
fn alice_round_trip_keeps_created_at() {
    let store = CredentialStore::new(SqliteStore::open_in_memory().unwrap());

    let registered = store.register("alice", "pw1").unwrap();
    store.logout().unwrap();
    assert!(store.current_user().unwrap().is_none());

    store.login("alice", "pw1").unwrap();
    let current = store.current_user().unwrap().expect("alice is logged in");
    assert_eq!(current.username, "alice");
    assert_eq!(current.created_at, registered.created_at);
}

#[test]
fn session_and_users_survive_restart() {
    let path = temp_db_path();
    {
        let store = CredentialStore::new(SqliteStore::open(&path).unwrap());
        store.register("carol", "hunter2").unwrap();
        store.login("carol", "hunter2").unwrap();
    }

    let store = CredentialStore::new(SqliteStore::open(&path).unwrap());
    let carol = store.current_user().unwrap().expect("session restored");
    assert_eq!(carol.username, "carol");
    assert!(matches!(
        store.register("carol", "other"),
        Err(AuthError::DuplicateUsername)
    ));

    drop(store);
    cleanup(&path);
}

#[test]
fn reads_tables_written_by_the_browser_demo() {
    let kv = SqliteStore::open_in_memory().unwrap();
    kv.set(
        USERS_KEY,
        r#"{"dave":{"username":"dave","passwordHash":"pw","createdAt":"2025-03-09T08:00:00.000Z"}}"#,
    )
    .unwrap();
    kv.set(CURRENT_USER_KEY, "dave").unwrap();

    let store = CredentialStore::new(kv);
    assert_eq!(store.current_user().unwrap().unwrap().username, "dave");
    store.login("dave", "pw").unwrap();

    store.register("erin", "pw").unwrap();
    let raw = store.storage().get(USERS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"credentialSecret\":\"pw\""));
    assert!(!raw.contains("passwordHash"));
}
