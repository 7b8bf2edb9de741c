use uuid::Uuid;

use serenity_core::models::post::{Comment, Post};
use serenity_storage::documents::DocumentStore;
use serenity_storage::error::StorageError;
use serenity_storage::posts::PostStore;

async fn store_in(dir: &tempfile::TempDir) -> PostStore {
    let docs = DocumentStore::open(dir.path()).await.expect("open store");
    PostStore::new(docs)
}

#[tokio::test]
async fn create_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let post = Post::new("today was a good day", Uuid::new_v4(), false);
    store.create(&post).await.unwrap();

    let loaded = store.load(post.id).await.unwrap();
    assert_eq!(loaded.content, "today was a good day");
    assert_eq!(loaded.likes, 0);
    assert!(loaded.comments.is_empty());
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let result = store.load(Uuid::new_v4()).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn comments_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let post = Post::new("anyone else journaling?", Uuid::new_v4(), true);
    store.create(&post).await.unwrap();

    store
        .add_comment(post.id, Comment::new("every morning", Uuid::new_v4(), false))
        .await
        .unwrap();
    let updated = store
        .add_comment(post.id, Comment::new("started last week", Uuid::new_v4(), true))
        .await
        .unwrap();

    assert_eq!(updated.comments.len(), 2);
    assert_eq!(updated.comments[0].content, "every morning");
    assert_eq!(updated.comments[1].content, "started last week");
}

#[tokio::test]
async fn likes_only_increment() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let post = Post::new("small wins count", Uuid::new_v4(), false);
    store.create(&post).await.unwrap();

    assert_eq!(store.like(post.id).await.unwrap(), 1);
    assert_eq!(store.like(post.id).await.unwrap(), 2);
    assert_eq!(store.like(post.id).await.unwrap(), 3);
}

#[tokio::test]
async fn list_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let author = Uuid::new_v4();
    for content in ["first", "second", "third"] {
        let post = Post::new(content, author, false);
        store.create(&post).await.unwrap();
        // Distinct creation timestamps so ordering is deterministic.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let posts = store.list().await.unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].content, "third");
    assert_eq!(posts[2].content, "first");
}
