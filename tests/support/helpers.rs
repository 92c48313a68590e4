// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use eventboard::application::{ports::time::Clock, services::ApplicationServices};
use eventboard::domain::event::EventRepository;
use eventboard::infrastructure::repositories::InMemoryEventRepository;
use eventboard::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryEventRepository::default()))
}

/// Router over a caller-supplied repository, so tests can seed the store
/// directly (e.g. with past events the create endpoint would reject).
pub fn make_test_router_with_repo(repo: Arc<InMemoryEventRepository>) -> axum::Router {
    let repo: Arc<dyn EventRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock::default());
    let services = Arc::new(ApplicationServices::new(repo, clock));
    build_router(HttpState { services })
}

pub async fn get(router: axum::Router, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.oneshot(req).await.unwrap()
}

pub async fn post_json(router: axum::Router, uri: &str, payload: &Value) -> Response<Body> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    router.oneshot(req).await.unwrap()
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).unwrap()
}
