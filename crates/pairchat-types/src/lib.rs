//! Shared domain types for pairchat.
//!
//! This crate contains the types passed between the layers of the workspace:
//! chat handles, room keys, stored messages, pages, pull requests, and the
//! error and configuration types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod page;
