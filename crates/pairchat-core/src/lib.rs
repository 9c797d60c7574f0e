//! Business logic and the storage port for pairchat.
//!
//! This crate resolves chat handles into room keys, appends and reads
//! messages through the `OrderedCollection` port, and pages through room
//! logs. It depends only on `pairchat-types` -- never on `pairchat-infra`
//! or any database/IO crate.

pub mod pagination;
pub mod room;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
