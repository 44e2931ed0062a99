//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{typeone_info, typeone_message, typetwo_info, typetwo_message};
use crate::profile::Activation;

/// Create the API router for the given activation.
///
/// Exactly the route group matching the activation is registered;
/// the other group's paths fall through to axum's default 404. For
/// `Neither`, no routes are registered at all.
pub fn create_router(activation: Activation) -> Router {
    let router = match activation {
        Activation::TypeOne => Router::new().nest("/typeone", typeone_routes()),
        Activation::TypeTwo => Router::new().nest("/typetwo", typetwo_routes()),
        Activation::Neither => Router::new(),
    };

    router.layer(TraceLayer::new_for_http())
}

/// Routes for the "typeone" group.
fn typeone_routes() -> Router {
    Router::new()
        .route("/message", get(typeone_message))
        .route("/info", get(typeone_info))
}

/// Routes for the "typetwo" group.
fn typetwo_routes() -> Router {
    Router::new()
        .route("/message", get(typetwo_message))
        .route("/info", get(typetwo_info))
}
