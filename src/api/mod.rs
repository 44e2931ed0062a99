//! HTTP API module for the profile-gated route groups.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
