use uuid::Uuid;

use serenity_core::models::chat::{DEFAULT_TITLE, Message};
use serenity_storage::documents::DocumentStore;
use serenity_storage::error::StorageError;
use serenity_storage::sessions::SessionStore;

async fn store_in(dir: &tempfile::TempDir) -> SessionStore {
    let docs = DocumentStore::open(dir.path()).await.expect("open store");
    SessionStore::new(docs)
}

#[tokio::test]
async fn created_session_is_empty_with_default_title() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();

    let session = store.create(owner).await.unwrap();
    assert_eq!(session.title, DEFAULT_TITLE);
    assert!(session.messages.is_empty());

    let loaded = store.load(session.id, owner).await.unwrap();
    assert_eq!(loaded.id, session.id);
    assert_eq!(loaded.owner_id, owner);
}

#[tokio::test]
async fn first_pair_sets_title_third_pair_leaves_it() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let session = store.create(owner).await.unwrap();

    let updated = store
        .append_turn(
            session.id,
            owner,
            0,
            Message::user("I feel overwhelmed by everything at work", None),
            Message::assistant("That sounds exhausting. What part weighs on you most?"),
        )
        .await
        .unwrap();

    assert_eq!(updated.messages.len(), 2);
    assert_eq!(updated.title, "I feel overwhelmed by everythi...");

    let updated = store
        .append_turn(
            session.id,
            owner,
            2,
            Message::user("mostly deadlines", None),
            Message::assistant("Let's look at those together."),
        )
        .await
        .unwrap();

    assert_eq!(updated.messages.len(), 4);
    assert_eq!(updated.title, "I feel overwhelmed by everythi...");
}

#[tokio::test]
async fn stale_expected_len_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let session = store.create(owner).await.unwrap();

    store
        .append_turn(
            session.id,
            owner,
            0,
            Message::user("hello", None),
            Message::assistant("hi"),
        )
        .await
        .unwrap();

    // A writer that assembled its exchange against the empty history
    // must fail loudly rather than clobber the first pair.
    let result = store
        .append_turn(
            session.id,
            owner,
            0,
            Message::user("concurrent", None),
            Message::assistant("writer"),
        )
        .await;

    assert!(matches!(result, Err(StorageError::Conflict { .. })));

    let loaded = store.load(session.id, owner).await.unwrap();
    assert_eq!(loaded.messages.len(), 2);
}

#[tokio::test]
async fn cross_owner_load_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let session = store.create(owner).await.unwrap();

    let other = Uuid::new_v4();
    let result = store.load(session.id, other).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn list_is_owner_scoped_and_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let first = store.create(owner).await.unwrap();
    let second = store.create(owner).await.unwrap();
    store.create(stranger).await.unwrap();

    // Touch the first session so it becomes the most recently updated.
    store
        .append_turn(
            first.id,
            owner,
            0,
            Message::user("hi", None),
            Message::assistant("hello"),
        )
        .await
        .unwrap();

    let sessions = store.list(owner).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, first.id);
    assert_eq!(sessions[1].id, second.id);
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let session = store.create(owner).await.unwrap();

    store.delete(session.id, owner).await.unwrap();

    let result = store.delete(session.id, owner).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn delete_is_owner_scoped() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let owner = Uuid::new_v4();
    let session = store.create(owner).await.unwrap();

    let result = store.delete(session.id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));

    // Still present for the real owner.
    assert!(store.load(session.id, owner).await.is_ok());
}
