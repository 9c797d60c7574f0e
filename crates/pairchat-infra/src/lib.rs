//! Infrastructure layer for pairchat.
//!
//! Contains implementations of the `OrderedCollection` port defined in
//! `pairchat-core` (SQLite and in-memory room logs), the backend selector
//! used by the binary, and the `config.toml` loader.

pub mod backend;
pub mod config;
pub mod memory;
pub mod sqlite;
