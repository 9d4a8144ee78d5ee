//! Web service for intake validation and annotation
//!
//! REST endpoints around the notation extractor plus the annotation proxy:
//! extraction, intake gating, and the `/api/search` annotation endpoint that
//! forwards to the configured inference backend (or serves the built-in
//! payload when none is configured).

pub mod config;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::ServiceConfig;
pub use server::{create_app, AppState};
