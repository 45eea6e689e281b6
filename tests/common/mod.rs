//! Common Test Utilities
//!
//! An in-memory forum standing in for PostgreSQL, and a `TestApp` that drives
//! the real router through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_api::config::{
    CorsSettings, DatabaseSettings, IdSettings, JwtSettings, ServerSettings, Settings,
};
use forum_api::domain::{
    AddComment, AddLike, AddReply, AddThread, AddedComment, AddedReply, AddedThread,
    CommentRecord, CommentRepository, LikeRepository, LikeState, PasswordHash, RegisterUser,
    RegisteredUser, ReplyRecord, ReplyRepository, ThreadRecord, ThreadRepository,
    UserCredentials, UserRepository,
};
use forum_api::infrastructure::repositories::Repositories;
use forum_api::infrastructure::security::JwtTokenManager;
use forum_api::shared::error::AppError;
use forum_api::shared::id::IdGenerator;
use forum_api::startup::{build_router, AppState};

struct UserRow {
    id: String,
    username: String,
    password: String,
}

struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

struct PostRow {
    id: String,
    parent_id: String,
    content: String,
    owner: String,
    date: DateTime<Utc>,
    is_deleted: bool,
}

#[derive(Default)]
struct Store {
    users: Vec<UserRow>,
    threads: Vec<ThreadRow>,
    comments: Vec<PostRow>,
    replies: Vec<PostRow>,
    likes: Vec<(String, String)>,
}

impl Store {
    fn username(&self, user_id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| user_id.to_string())
    }
}

/// All five repositories over one shared in-memory store.
pub struct InMemoryForum {
    store: Mutex<Store>,
    ids: IdGenerator,
}

impl InMemoryForum {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
            ids: IdGenerator::new(7),
        }
    }

    /// Number of stored like rows for a (comment, user) pair.
    pub fn like_rows(&self, comment_id: &str, user_id: &str) -> usize {
        self.store
            .lock()
            .likes
            .iter()
            .filter(|(c, u)| c == comment_id && u == user_id)
            .count()
    }

    /// Whether a comment row still exists and its deleted flag.
    pub fn comment_is_deleted(&self, comment_id: &str) -> Option<bool> {
        self.store
            .lock()
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .map(|c| c.is_deleted)
    }
}

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let id = self.ids.next_id("user");
        self.store.lock().users.push(UserRow {
            id: id.clone(),
            username: user.username.clone(),
            password: user.password.clone(),
        });
        Ok(RegisteredUser {
            id,
            username: user.username.clone(),
            fullname: user.fullname.clone(),
        })
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        if self.store.lock().users.iter().any(|u| u.username == username) {
            return Err(AppError::Invariant("username tidak tersedia".into()));
        }
        Ok(())
    }

    async fn get_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<UserCredentials, AppError> {
        self.store
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| UserCredentials {
                id: u.id.clone(),
                password_hash: u.password.clone(),
            })
            .ok_or_else(|| AppError::Invariant("username tidak ditemukan".into()))
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForum {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError> {
        let id = self.ids.next_id("thread");
        self.store.lock().threads.push(ThreadRow {
            id: id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: thread.owner.clone(),
            date: Utc::now(),
        });
        Ok(AddedThread {
            id,
            title: thread.title.clone(),
            owner: thread.owner.clone(),
        })
    }

    async fn verify_thread_id(&self, id: &str) -> Result<(), AppError> {
        if !self.store.lock().threads.iter().any(|t| t.id == id) {
            return Err(AppError::NotFound("Thread tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadRecord, AppError> {
        let store = self.store.lock();
        store
            .threads
            .iter()
            .find(|t| t.id == id)
            .map(|t| ThreadRecord {
                id: t.id.clone(),
                title: t.title.clone(),
                body: t.body.clone(),
                date: t.date,
                username: store.username(&t.owner),
            })
            .ok_or_else(|| AppError::NotFound("Thread tidak ditemukan".into()))
    }
}

#[async_trait]
impl CommentRepository for InMemoryForum {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError> {
        let id = self.ids.next_id("comment");
        self.store.lock().comments.push(PostRow {
            id: id.clone(),
            parent_id: comment.thread_id.clone(),
            content: comment.content.clone(),
            owner: comment.owner.clone(),
            date: Utc::now(),
            is_deleted: false,
        });
        Ok(AddedComment {
            id,
            content: comment.content.clone(),
            owner: comment.owner.clone(),
        })
    }

    async fn verify_comment_id(&self, id: &str) -> Result<(), AppError> {
        if !self.store.lock().comments.iter().any(|c| c.id == id) {
            return Err(AppError::NotFound("Comment tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<(), AppError> {
        let store = self.store.lock();
        let comment = store
            .comments
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Comment tidak ditemukan".into()))?;
        if comment.owner != owner {
            return Err(AppError::Forbidden(
                "Anda tidak dapat menghapus comment ini".into(),
            ));
        }
        Ok(())
    }

    async fn delete_comment(&self, id: &str) -> Result<(), AppError> {
        let mut store = self.store.lock();
        let comment = store
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Comment tidak ditemukan".into()))?;
        comment.is_deleted = true;
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRecord>, AppError> {
        let store = self.store.lock();
        Ok(store
            .comments
            .iter()
            .filter(|c| c.parent_id == thread_id)
            .map(|c| CommentRecord {
                id: c.id.clone(),
                username: store.username(&c.owner),
                date: c.date,
                content: c.content.clone(),
                is_deleted: c.is_deleted,
            })
            .collect())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryForum {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError> {
        let id = self.ids.next_id("reply");
        self.store.lock().replies.push(PostRow {
            id: id.clone(),
            parent_id: reply.comment_id.clone(),
            content: reply.content.clone(),
            owner: reply.owner.clone(),
            date: Utc::now(),
            is_deleted: false,
        });
        Ok(AddedReply {
            id,
            content: reply.content.clone(),
            owner: reply.owner.clone(),
        })
    }

    async fn verify_reply_id(&self, id: &str) -> Result<(), AppError> {
        if !self.store.lock().replies.iter().any(|r| r.id == id) {
            return Err(AppError::NotFound("Reply tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_reply_owner(&self, id: &str, owner: &str) -> Result<(), AppError> {
        let store = self.store.lock();
        let reply = store
            .replies
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Reply tidak ditemukan".into()))?;
        if reply.owner != owner {
            return Err(AppError::Forbidden("Anda tidak dapat menghapus reply ini".into()));
        }
        Ok(())
    }

    async fn delete_reply(&self, id: &str) -> Result<(), AppError> {
        let mut store = self.store.lock();
        let reply = store
            .replies
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Reply tidak ditemukan".into()))?;
        reply.is_deleted = true;
        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRecord>, AppError> {
        let store = self.store.lock();
        Ok(store
            .replies
            .iter()
            .filter(|r| r.parent_id == comment_id)
            .map(|r| ReplyRecord {
                id: r.id.clone(),
                content: r.content.clone(),
                date: r.date,
                username: store.username(&r.owner),
                is_deleted: r.is_deleted,
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryForum {
    async fn add_like(&self, like: &AddLike) -> Result<(), AppError> {
        let mut store = self.store.lock();
        let pair = (like.comment_id.clone(), like.user_id.clone());
        if !store.likes.contains(&pair) {
            store.likes.push(pair);
        }
        Ok(())
    }

    async fn verify_like_existing(&self, like: &AddLike) -> Result<bool, AppError> {
        let pair = (like.comment_id.clone(), like.user_id.clone());
        Ok(self.store.lock().likes.contains(&pair))
    }

    async fn delete_like(&self, like: &AddLike) -> Result<(), AppError> {
        self.store
            .lock()
            .likes
            .retain(|(c, u)| !(c == &like.comment_id && u == &like.user_id));
        Ok(())
    }

    async fn toggle_like(&self, like: &AddLike) -> Result<LikeState, AppError> {
        let mut store = self.store.lock();
        let before = store.likes.len();
        store
            .likes
            .retain(|(c, u)| !(c == &like.comment_id && u == &like.user_id));
        if store.likes.len() < before {
            return Ok(LikeState::Unliked);
        }
        store
            .likes
            .push((like.comment_id.clone(), like.user_id.clone()));
        Ok(LikeState::Liked)
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u64, AppError> {
        Ok(self
            .store
            .lock()
            .likes
            .iter()
            .filter(|(c, _)| c == comment_id)
            .count() as u64)
    }
}

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct PlainPasswordHash;

impl PasswordHash for PlainPasswordHash {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(format!("hashed:{}", password))
    }

    fn compare(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        if hashed != format!("hashed:{}", password) {
            return Err(AppError::Unauthorized(
                "kredensial yang Anda masukkan salah".into(),
            ));
        }
        Ok(())
    }
}

pub const TEST_PASSWORD: &str = "secret";

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/forumapi_test".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 1,
            run_migrations: false,
        },
        jwt: JwtSettings {
            secret: "integration_test_secret_at_least_32_chars".into(),
            access_token_age_secs: 3000,
        },
        ids: IdSettings { machine_id: 7 },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Parsed response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub forum: Arc<InMemoryForum>,
}

impl TestApp {
    pub fn new() -> Self {
        let settings = test_settings();
        let forum = Arc::new(InMemoryForum::new());

        let state = AppState {
            repositories: Repositories {
                users: forum.clone(),
                threads: forum.clone(),
                comments: forum.clone(),
                replies: forum.clone(),
                likes: forum.clone(),
            },
            password_hash: Arc::new(PlainPasswordHash),
            tokens: Arc::new(JwtTokenManager::new(&settings.jwt)),
        };

        Self {
            router: build_router(state, &settings),
            forum,
        }
    }

    /// Send a request and return the raw status and body text.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Send a request with an optional JSON body and parse the JSON response.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let (status, text) = self
            .send_raw(method, uri, body.map(|b| b.to_string()), token)
            .await;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap()
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, Some(body), token).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::PUT, uri, None, token).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, None, token).await
    }

    /// Register `username` and log in. Returns (user id, access token).
    pub async fn register_and_login(&self, username: &str) -> (String, String) {
        let registered = self
            .post(
                "/users",
                json!({
                    "username": username,
                    "password": TEST_PASSWORD,
                    "fullname": format!("{} fullname", username),
                }),
                None,
            )
            .await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);
        let user_id = registered.body["data"]["addedUser"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let login = self
            .post(
                "/authentications",
                json!({ "username": username, "password": TEST_PASSWORD }),
                None,
            )
            .await;
        assert_eq!(login.status, StatusCode::CREATED, "{}", login.body);
        let token = login.body["data"]["accessToken"]
            .as_str()
            .unwrap()
            .to_string();

        (user_id, token)
    }

    pub async fn create_thread(&self, token: &str) -> String {
        let response = self
            .post(
                "/threads",
                json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["addedThread"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub async fn create_comment(&self, token: &str, thread_id: &str) -> String {
        let response = self
            .post(
                &format!("/threads/{}/comments", thread_id),
                json!({ "content": "sebuah comment" }),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["addedComment"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub async fn create_reply(&self, token: &str, thread_id: &str, comment_id: &str) -> String {
        let response = self
            .post(
                &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
                json!({ "content": "sebuah balasan" }),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["addedReply"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }
}
