use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{router::router, state::AppState};


/// Full router over an in-memory database, carrying the session cookie between requests
/// like a browser would.
struct TestApp {
    router: Router,
    cookie: Option<String>,
    _context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.database().await.unwrap().clone();

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store.migrate().await.unwrap();

        let router = router()
            .with_state(AppState::new(db))
            .layer(SessionManagerLayer::new(store).with_secure(false));

        Self {
            router,
            cookie: None,
            _context: context,
        }
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&mut self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, body).await
    }

    async fn delete(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Registers an account and returns its id.
    async fn register(&mut self, email: &str, name: &str) -> i32 {
        let (status, body) = self
            .post(
                "/api/users",
                json!({ "email": email, "password": "password", "name": name }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

        body["id"].as_i64().unwrap() as i32
    }

    async fn login(&mut self, email: &str) {
        let (status, body) = self
            .post(
                "/api/auth/login",
                json!({ "email": email, "password": "password" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
    }

    /// Registers and logs in, returning the new user id.
    async fn sign_in(&mut self, email: &str, name: &str) -> i32 {
        let id = self.register(email, name).await;
        self.login(email).await;
        id
    }

    async fn logout(&mut self) {
        let (status, _) = self.send(Method::POST, "/api/auth/logout", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        self.cookie = None;
    }

    /// Creates a post as `user_id` and returns its id.
    async fn create_post(&mut self, user_id: i32, content: &str) -> i32 {
        let (status, body) = self
            .post(&format!("/api/posts/{}", user_id), json!({ "content": content }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create post failed: {body}");

        body["id"].as_i64().unwrap() as i32
    }
}
