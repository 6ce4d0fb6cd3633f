//! In-process mock of the remote API for tests.
//!
//! Spins up an axum router on an ephemeral port with canned fixtures,
//! request counters, and failure toggles, so aggregation and mutation logic
//! is exercised over real HTTP round trips.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

use aperture_api::ApiClient;
use aperture_shared::User;
use aperture_store::{Database, SessionRecord};

use crate::session::Session;

/// Shared toggles and counters for a mock server instance.
#[derive(Clone, Default)]
pub(crate) struct MockState {
    /// Requests received by mutation endpoints (like, follow, comment,
    /// photo edit/delete, donations).
    pub mutation_hits: Arc<AtomicUsize>,
    /// Requests received by the following-list endpoint.
    pub following_hits: Arc<AtomicUsize>,
    /// Make every mutation endpoint answer 500.
    pub fail_mutations: Arc<AtomicBool>,
    /// Make `GET /iam/user/me` answer 401.
    pub fail_me: Arc<AtomicBool>,
    /// Make `GET /photos/{id}` answer 500.
    pub fail_photo: Arc<AtomicBool>,
}

impl MockState {
    pub fn mutations(&self) -> usize {
        self.mutation_hits.load(Ordering::SeqCst)
    }

    fn count_mutation(&self) -> Result<(), Response> {
        self.mutation_hits.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))).into_response())
        } else {
            Ok(())
        }
    }
}

/// Serve the mock API, returning its base URL.
pub(crate) async fn serve(state: MockState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

/// The signed-in test account.
pub(crate) fn ann() -> User {
    User {
        id: "u9".into(),
        nickname: "ann".into(),
        email: "ann@example.com".into(),
        about: None,
        profile_image: Some("/avatars/u9.png".into()),
        followers_count: 4,
        following_count: 2,
        followed_by_current_user: false,
    }
}

/// A session with "ann" signed in, backed by a throwaway database.
pub(crate) async fn signed_in_session(base_url: &str) -> (Session, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_at(&dir.path().join("session.db")).unwrap();
    db.save_session(&SessionRecord {
        token: "tok-test".into(),
        user: ann(),
    })
    .unwrap();

    let api = Arc::new(ApiClient::new(base_url));
    let session = Session::init(api, db).unwrap();
    (session, dir)
}

/// A signed-out session backed by a throwaway database.
pub(crate) async fn anonymous_session(base_url: &str) -> (Session, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_at(&dir.path().join("session.db")).unwrap();
    let api = Arc::new(ApiClient::new(base_url));
    let session = Session::init(api, db).unwrap();
    (session, dir)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub(crate) fn photo_json(id: &str, likes: u64, liked: bool) -> Value {
    json!({
        "id": id,
        "title": "Untitled",
        "description": null,
        "url": format!("/photos/{id}.jpg"),
        "tags": ["sunset", "beach"],
        "userId": "u9",
        "nickname": "ann",
        "userProfileImage": "/avatars/u9.png",
        "likesCount": likes,
        "commentsCount": 0,
        "likedByCurrentUser": liked,
        "createdAt": "2026-01-15T08:30:00Z"
    })
}

pub(crate) fn user_json(id: &str, nickname: &str, followers: u64, followed: bool) -> Value {
    json!({
        "id": id,
        "nickname": nickname,
        "email": format!("{nickname}@example.com"),
        "about": null,
        "profileImage": null,
        "followersCount": followers,
        "followingCount": 2,
        "followedByCurrentUser": followed
    })
}

fn comment_json(id: &str, content: &str, user_id: &str, nickname: &str, photo_id: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "userId": user_id,
        "photoId": photo_id,
        "nickname": nickname,
        "userProfileImage": null,
        "createdAt": "2026-01-15T09:00:00Z"
    })
}

fn page_json(content: Vec<Value>, total: u64) -> Value {
    json!({ "content": content, "totalElements": total })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

fn router(state: MockState) -> Router {
    Router::new()
        // auth
        .route("/iam/auth/login", post(login))
        .route("/iam/auth/signup", post(signup))
        .route("/iam/user/me", get(me))
        // users / follows / donations
        .route("/iam/user/:id", get(user_by_id))
        .route("/iam/user/:id/follow", post(follow).delete(unfollow))
        .route("/iam/user/:id/followers", get(followers))
        .route("/iam/user/:id/following", get(following))
        .route("/iam/platforms", get(platforms))
        .route("/iam/user/me/donations", get(my_donations).post(add_donation))
        .route("/iam/user/me/donations/:id", delete(delete_donation))
        .route("/iam/user/:id/donations-by-id", get(donations_by_id))
        .route("/iam/user/me/about", put(update_about))
        // photos
        .route("/photos/trending", get(trending))
        .route("/photos/tags", get(photos_by_tag))
        .route("/photos/user/:id", get(user_photos))
        .route("/photos/user/profile-image", post(profile_image))
        .route("/photos/upload", post(upload))
        .route("/photos/comments/count/user", get(comment_count))
        .route("/photos/:id", get(photo).put(update_photo).delete(delete_photo))
        .route("/photos/:id/like", post(like).delete(unlike))
        // comments
        .route("/comments/:id", get(comments).post(create_comment).delete(delete_comment))
        // tags
        .route("/tags", get(all_tags))
        .with_state(state)
}

async fn login() -> Json<Value> {
    Json(json!({
        "accessToken": "tok-login",
        "refreshToken": "tok-refresh",
        "expiresIn": 3600
    }))
}

async fn signup() -> StatusCode {
    StatusCode::CREATED
}

async fn me(State(state): State<MockState>) -> Response {
    if state.fail_me.load(Ordering::SeqCst) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"}))).into_response();
    }
    Json(user_json("u9", "ann", 4, false)).into_response()
}

async fn user_by_id(Path(id): Path<String>) -> Json<Value> {
    if id == "u9" {
        Json(user_json("u9", "ann", 4, false))
    } else {
        Json(user_json(&id, &format!("nick-{id}"), 3, false))
    }
}

async fn follow(State(state): State<MockState>, Path(nickname): Path<String>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(user_json("u7", &nickname, 100, true)).into_response()
}

async fn unfollow(State(state): State<MockState>, Path(nickname): Path<String>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(user_json("u7", &nickname, 99, false)).into_response()
}

async fn followers(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let content = if page < 2 {
        vec![user_json(&format!("f{page}"), &format!("follower-{page}"), 0, false)]
    } else {
        Vec::new()
    };
    Json(page_json(content, 2))
}

async fn following(State(state): State<MockState>) -> Json<Value> {
    state.following_hits.fetch_add(1, Ordering::SeqCst);
    Json(page_json(vec![user_json("g0", "followed-0", 0, true)], 1))
}

async fn platforms() -> Json<Value> {
    Json(json!([{
        "id": 1,
        "name": "Patreon",
        "icon": "/icons/patreon.png",
        "baseUrl": "https://patreon.com"
    }]))
}

async fn my_donations() -> Json<Value> {
    Json(json!([]))
}

async fn add_donation(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(json!([{
        "id": 11,
        "platformId": body["platformId"],
        "platformName": "Patreon",
        "platformIcon": "/icons/patreon.png",
        "donationLink": body["donationLink"]
    }]))
    .into_response()
}

async fn delete_donation(State(state): State<MockState>) -> Response {
    match state.count_mutation() {
        Err(resp) => resp,
        Ok(()) => StatusCode::OK.into_response(),
    }
}

async fn donations_by_id(Path(id): Path<String>) -> Json<Value> {
    Json(json!([{
        "id": 21,
        "platformId": 1,
        "platformName": "Patreon",
        "platformIcon": "/icons/patreon.png",
        "donationLink": format!("https://patreon.com/{id}")
    }]))
}

async fn update_about(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    let mut user = user_json("u9", "ann", 4, false);
    user["about"] = body["about"].clone();
    Json(user).into_response()
}

async fn trending(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let content = match page {
        // t2 repeats on the second page to exercise deduplication.
        0 => vec![photo_json("t1", 5, false), photo_json("t2", 2, false)],
        1 => vec![photo_json("t2", 2, false), photo_json("t3", 9, false)],
        _ => Vec::new(),
    };
    Json(page_json(content, 3))
}

async fn photos_by_tag() -> Json<Value> {
    Json(page_json(
        vec![
            photo_json("p1", 5, false),
            photo_json("s1", 1, false),
            photo_json("s2", 0, false),
        ],
        3,
    ))
}

async fn user_photos() -> Json<Value> {
    Json(page_json(
        vec![
            photo_json("lib-1", 3, false),
            photo_json("lib-2", 7, false),
            photo_json("lib-3", 7, false),
        ],
        3,
    ))
}

async fn profile_image(State(state): State<MockState>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(json!({"profileImage": "/avatars/new.png"})).into_response()
}

async fn upload(State(state): State<MockState>) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(photo_json("new-1", 0, false)).into_response()
}

async fn comment_count() -> Json<Value> {
    Json(json!({"totalCommentsCount": 12}))
}

async fn photo(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    if state.fail_photo.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))).into_response();
    }
    Json(photo_json(&id, 5, false)).into_response()
}

async fn update_photo(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    let mut photo = photo_json(&id, 5, false);
    for field in ["title", "description", "tags"] {
        if !body[field].is_null() {
            photo[field] = body[field].clone();
        }
    }
    Json(photo).into_response()
}

async fn delete_photo(State(state): State<MockState>) -> Response {
    match state.count_mutation() {
        Err(resp) => resp,
        Ok(()) => Json(json!({"success": true})).into_response(),
    }
}

async fn like(State(state): State<MockState>) -> Response {
    match state.count_mutation() {
        Err(resp) => resp,
        Ok(()) => Json(json!({"likes": 1, "isLiked": true})).into_response(),
    }
}

async fn unlike(State(state): State<MockState>) -> Response {
    match state.count_mutation() {
        Err(resp) => resp,
        Ok(()) => Json(json!({"likes": 0, "isLiked": false})).into_response(),
    }
}

async fn comments(Path(photo_id): Path<String>) -> Json<Value> {
    Json(page_json(
        vec![comment_json("c1", "lovely light", "u2", "bo", &photo_id)],
        1,
    ))
}

async fn create_comment(
    State(state): State<MockState>,
    Path(photo_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = state.count_mutation() {
        return resp;
    }
    Json(comment_json(
        "c-server",
        body["content"].as_str().unwrap_or(""),
        "u9",
        "ann",
        &photo_id,
    ))
    .into_response()
}

async fn delete_comment(State(state): State<MockState>) -> Response {
    match state.count_mutation() {
        Err(resp) => resp,
        Ok(()) => StatusCode::OK.into_response(),
    }
}

async fn all_tags() -> Json<Value> {
    Json(json!(["sunset", "beach", "street"]))
}
