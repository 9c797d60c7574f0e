//! HTTP transport for pairchat.
//!
//! Axum routes for sending and pulling messages, plus liveness endpoints.
//! Errors are rendered in a JSON envelope by [`error::AppError`].

pub mod error;
pub mod handlers;
pub mod router;
