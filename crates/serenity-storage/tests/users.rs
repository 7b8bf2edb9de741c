use serenity_core::models::user::User;
use serenity_storage::documents::DocumentStore;
use serenity_storage::error::StorageError;
use serenity_storage::users::UserStore;

async fn store_in(dir: &tempfile::TempDir) -> UserStore {
    let docs = DocumentStore::open(dir.path()).await.expect("open store");
    UserStore::new(docs)
}

#[tokio::test]
async fn create_and_find_by_email() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let user = User::new("ada", "ada@example.com", "$2b$12$hash");
    store.create(&user).await.unwrap();

    let found = store.find_by_email("ada@example.com").await.unwrap();
    assert_eq!(found.unwrap().id, user.id);

    // Lookup is case-insensitive.
    let found = store.find_by_email("ADA@Example.COM").await.unwrap();
    assert!(found.is_some());

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let user = User::new("ada", "ada@example.com", "$2b$12$hash");
    store.create(&user).await.unwrap();

    let twin = User::new("ada2", "ada@example.com", "$2b$12$other");
    let result = store.create(&twin).await;
    assert!(matches!(result, Err(StorageError::AlreadyExists { .. })));
}

#[tokio::test]
async fn load_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let user = User::new("grace", "grace@example.com", "$2b$12$hash");
    store.create(&user).await.unwrap();

    let loaded = store.load(user.id).await.unwrap();
    assert_eq!(loaded.username, "grace");
}
