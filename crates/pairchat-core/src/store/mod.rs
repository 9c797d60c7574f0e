//! Room log storage: the ordered collection port and the message store
//! that serializes messages into it.

pub mod collection;
pub mod message_store;

pub use collection::OrderedCollection;
pub use message_store::MessageStore;
