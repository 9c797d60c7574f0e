//! SQLite storage layer.
//!
//! Room logs backed by SQLite with WAL mode and split read/write
//! connection pools.

pub mod pool;
pub mod room_log;
