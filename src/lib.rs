//! Profile-gated REST route demo.
//!
//! An HTTP front end that reads an activation selector (a profile name)
//! from its configuration at startup and registers exactly one of two
//! otherwise-identical route groups:
//!
//! ```text
//! ACTIVE_PROFILE=typeone  ->  GET /typeone/message, GET /typeone/info
//! ACTIVE_PROFILE=typetwo  ->  GET /typetwo/message, GET /typetwo/info
//! anything else           ->  no routes; all paths return 404
//! ```
//!
//! The selector is read once, before route registration, and the chosen
//! configuration never changes for the process lifetime.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`profile`]: Selector parsing and activation resolution
//! - [`api`]: Router and handlers for the gated route groups
//! - [`server`]: Listener bind and graceful shutdown
//! - [`error`]: Unified error types
//! - [`metrics`]: Request counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod profile;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use profile::{Activation, Profile};
