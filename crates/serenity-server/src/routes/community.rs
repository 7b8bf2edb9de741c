use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use serenity_core::models::post::{Comment, Post};
use serenity_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ANONYMOUS_USER: &str = "Anonymous User";

fn post_not_found(e: StorageError) -> ApiError {
    match e {
        StorageError::NotFound { .. } => ApiError::NotFound("Post not found".to_string()),
        other => ApiError::from(other),
    }
}

// ── View models ──────────────────────────────────────────────────────────────
//
// Stored aggregates carry author ids only; the API surface shows a display
// name and masks it entirely for anonymous content.

#[derive(Serialize)]
pub struct AuthorView {
    username: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    content: String,
    author: AuthorView,
    is_anonymous: bool,
    likes: u64,
    created_at: jiff::Timestamp,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    id: Uuid,
    content: String,
    author: AuthorView,
    is_anonymous: bool,
    likes: u64,
    comments: Vec<CommentView>,
    created_at: jiff::Timestamp,
}

/// Resolve display names for a batch of posts, masking anonymous authors.
async fn render_posts(state: &AppState, posts: Vec<Post>) -> Result<Vec<PostView>, ApiError> {
    let mut usernames: HashMap<Uuid, String> = HashMap::new();

    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
        views.push(render_post(state, post, &mut usernames).await?);
    }
    Ok(views)
}

async fn render_post(
    state: &AppState,
    post: Post,
    usernames: &mut HashMap<Uuid, String>,
) -> Result<PostView, ApiError> {
    let author = author_view(state, post.author_id, post.is_anonymous, usernames).await?;

    let mut comments = Vec::with_capacity(post.comments.len());
    for comment in post.comments {
        let author =
            author_view(state, comment.author_id, comment.is_anonymous, usernames).await?;
        comments.push(CommentView {
            content: comment.content,
            author,
            is_anonymous: comment.is_anonymous,
            likes: comment.likes,
            created_at: comment.created_at,
        });
    }

    Ok(PostView {
        id: post.id,
        content: post.content,
        author,
        is_anonymous: post.is_anonymous,
        likes: post.likes,
        comments,
        created_at: post.created_at,
    })
}

async fn author_view(
    state: &AppState,
    author_id: Uuid,
    is_anonymous: bool,
    usernames: &mut HashMap<Uuid, String>,
) -> Result<AuthorView, ApiError> {
    if is_anonymous {
        return Ok(AuthorView {
            username: ANONYMOUS_USER.to_string(),
        });
    }

    if let Some(username) = usernames.get(&author_id) {
        return Ok(AuthorView {
            username: username.clone(),
        });
    }

    // A deleted account still has posts; show a placeholder rather than 404.
    let username = match state.users.load(author_id).await {
        Ok(user) => user.username,
        Err(StorageError::NotFound { .. }) => "Unknown".to_string(),
        Err(other) => return Err(ApiError::from(other)),
    };
    usernames.insert(author_id, username.clone());

    Ok(AuthorView { username })
}

// ── Handlers ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    content: Option<String>,
    is_anonymous: Option<bool>,
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let content = req
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Content is required".to_string()))?;

    let post = Post::new(content, user.id, req.is_anonymous.unwrap_or(false));
    state.posts.create(&post).await?;

    let mut usernames = HashMap::new();
    let view = render_post(&state, post, &mut usernames).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let posts = state.posts.list().await?;
    Ok(Json(render_posts(&state, posts).await?))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostView>, ApiError> {
    let post = state.posts.load(id).await.map_err(post_not_found)?;
    let mut usernames = HashMap::new();
    Ok(Json(render_post(&state, post, &mut usernames).await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    content: Option<String>,
    is_anonymous: Option<bool>,
}

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let content = req
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Content is required".to_string()))?;

    let comment = Comment::new(content, user.id, req.is_anonymous.unwrap_or(false));
    let updated = state
        .posts
        .add_comment(id, comment)
        .await
        .map_err(post_not_found)?;

    let mut usernames = HashMap::new();
    let view = render_post(&state, updated, &mut usernames).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let likes = state.posts.like(id).await.map_err(post_not_found)?;
    Ok(Json(json!({ "likes": likes })))
}
