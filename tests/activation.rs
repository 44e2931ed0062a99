//! Integration tests for profile-gated route activation.
//!
//! Each test builds the router for one terminal activation state and
//! drives it directly with `tower::ServiceExt::oneshot`, no listener
//! required.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use profile_routes::api::create_router;
use profile_routes::profile::Activation;

/// Issue a GET and return (status, body-as-string).
async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn typeone_active_serves_exact_bodies() {
    let app = create_router(Activation::TypeOne);

    let (status, body) = get(&app, "/typeone/message").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from TypeOne Controller!");

    let (status, body) = get(&app, "/typeone/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "TypeOne Controller provides general information.");

    let (status, _) = get(&app, "/typetwo/message").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn typetwo_active_serves_exact_bodies() {
    let app = create_router(Activation::TypeTwo);

    let (status, body) = get(&app, "/typetwo/message").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from TypeTwo Controller!");

    let (status, body) = get(&app, "/typetwo/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "TypeTwo Controller provides general information.");

    let (status, _) = get(&app, "/typeone/info").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn neither_active_returns_404_everywhere() {
    let app = create_router(Activation::Neither);

    for uri in [
        "/typeone/message",
        "/typeone/info",
        "/typetwo/message",
        "/typetwo/info",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "expected 404 for {}", uri);
    }
}

#[tokio::test]
async fn repeated_requests_are_idempotent() {
    let app = create_router(Activation::TypeOne);

    let first = get(&app, "/typeone/message").await;
    for _ in 0..10 {
        let next = get(&app, "/typeone/message").await;
        assert_eq!(next, first);
    }
}

#[tokio::test]
async fn route_groups_are_mutually_exclusive() {
    for activation in [
        Activation::TypeOne,
        Activation::TypeTwo,
        Activation::Neither,
    ] {
        let app = create_router(activation);

        let (one, _) = get(&app, "/typeone/message").await;
        let (two, _) = get(&app, "/typetwo/message").await;

        assert!(
            !(one == StatusCode::OK && two == StatusCode::OK),
            "both groups answered 200 under {:?}",
            activation
        );
    }
}

#[tokio::test]
async fn unknown_paths_return_404_when_a_group_is_active() {
    let app = create_router(Activation::TypeOne);

    let (status, _) = get(&app, "/typeone/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
