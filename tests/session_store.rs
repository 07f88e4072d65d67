use std::fs;

use ltti_core::session::{Session, SessionConfig, SessionStore, StoreError, SESSION_FILE};
use ltti_core::types::QuestionId;
use tempfile::tempdir;

#[test]
fn save_then_load_restores_seed_order_and_answers() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("ltti"));

    let mut session = Session::with_seed(SessionConfig::v0(), 1_700_000_000_123).unwrap();
    session.set_answer(QuestionId::new(4), 5);
    session.set_answer(QuestionId::new(97), 9);
    store.save(&session).unwrap();

    assert!(store.path().ends_with(SESSION_FILE));
    assert!(!dir.path().join("ltti").join("session.json.tmp").exists(), "temp file must be renamed away");

    let restored = store.load(SessionConfig::v0()).unwrap().expect("session was saved");
    assert_eq!(restored.seed(), session.seed());
    assert_eq!(restored.questions(), session.questions());
    assert_eq!(restored.answers(), session.answers());
    assert_eq!(restored.report(), session.report());
    assert_eq!(restored.current_page(), 0);
}

#[test]
fn load_from_empty_store_is_none() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    assert!(store.load(SessionConfig::v0()).unwrap().is_none());
}

#[test]
fn load_or_start_persists_a_fresh_session_once() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());

    let first = store.load_or_start(SessionConfig::v0()).unwrap();
    assert!(store.path().exists());

    let second = store.load_or_start(SessionConfig::v0()).unwrap();
    assert_eq!(first.seed(), second.seed());
    assert_eq!(first.questions(), second.questions());
}

#[test]
fn saving_again_overwrites_previous_snapshot() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());

    let mut session = Session::with_seed(SessionConfig::v0(), 5).unwrap();
    session.set_answer(QuestionId::new(1), 2);
    store.save(&session).unwrap();

    session.reshuffle_with_seed(6);
    store.save(&session).unwrap();

    let restored = store.load(SessionConfig::v0()).unwrap().unwrap();
    assert_eq!(restored.seed(), 6);
    assert!(restored.answers().is_empty());
}

#[test]
fn clear_removes_the_snapshot() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.save(&Session::with_seed(SessionConfig::v0(), 1).unwrap()).unwrap();

    store.clear().unwrap();
    assert!(!store.path().exists());
    // Clearing twice is fine
    store.clear().unwrap();
    assert!(store.load(SessionConfig::v0()).unwrap().is_none());
}

#[test]
fn snapshot_for_another_catalog_is_rejected() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    fs::write(
        store.path(),
        r#"{"catalog_version":"sha256:0000","seed":3,"answers":{"1":5}}"#,
    )
    .unwrap();

    let err = store.load(SessionConfig::v0()).unwrap_err();
    match err {
        StoreError::CatalogMismatch { expected, found } => {
            assert_eq!(found.as_str(), "sha256:0000");
            assert_eq!(&expected, ltti_core::catalog::version());
        }
        other => panic!("expected catalog mismatch, got {other:?}"),
    }
}

#[test]
fn corrupt_snapshot_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(
        store.load(SessionConfig::v0()),
        Err(StoreError::Serialization(_))
    ));
}

#[test]
fn invalid_config_is_rejected_on_restore() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.save(&Session::with_seed(SessionConfig::v0(), 1).unwrap()).unwrap();

    let config = SessionConfig {
        page_size: 0,
        ..SessionConfig::v0()
    };
    assert!(matches!(store.load(config), Err(StoreError::Config(_))));
}

#[test]
fn failed_save_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());

    // A non-empty directory where the snapshot belongs makes the rename fail
    fs::create_dir(store.path()).unwrap();
    fs::write(store.path().join("keep"), "x").unwrap();

    let result = store.save(&Session::with_seed(SessionConfig::v0(), 1).unwrap());
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(!dir.path().join("session.json.tmp").exists());
}

#[test]
fn missing_store_directory_loads_nothing_and_clears_cleanly() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("never-created"));

    assert!(store.load(SessionConfig::v0()).unwrap().is_none());
    store.clear().unwrap();
    assert!(!store.root().exists());
}
