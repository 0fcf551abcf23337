//! Shared setup for placement-portal router tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use placement_portal::{
    catalog::Catalog, config::PortalConfig, startup::build_router, AppState,
};
use placement_session::MemoryStorage;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
}

impl TestApp {
    /// Demo catalog, in-memory storage, session already restored.
    pub async fn spawn() -> Self {
        let app = Self::unrestored();
        app.state.session.restore().await;
        app
    }

    /// Session left in its restoring state.
    pub fn unrestored() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState::with_storage(
            PortalConfig::local("unused.json"),
            Catalog::demo(),
            storage.clone(),
        );
        Self {
            router: build_router(state.clone()),
            state,
            storage,
        }
    }

    /// File-backed portal, as the binary runs it.
    pub async fn on_disk(storage_path: &Path) -> AppState {
        let state = AppState::new(PortalConfig::local(storage_path), Catalog::demo());
        state.session.restore().await;
        state
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn login(&self, email: &str, role: &str) -> TestResponse {
        self.post(
            "/auth/login",
            serde_json::json!({ "email": email, "password": "secret", "role": role }),
        )
        .await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        send(&self.router, method, uri, body).await
    }

    pub fn persisted(&self) -> Option<Value> {
        self.storage
            .peek(self.state.session.storage_key())
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
