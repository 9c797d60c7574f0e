//! Chat service composing the send and pull paths.
//!
//! ChatService is what the transports call: `send` validates the sender,
//! resolves the room and appends a timestamped message; `pull` applies the
//! request defaults and hands off to the pagination engine.

use std::sync::Arc;

use chrono::Utc;
use pairchat_types::chat::{Message, SendRequest};
use pairchat_types::error::ChatError;
use pairchat_types::page::{Page, PullRequest};
use tracing::info;

use crate::pagination::PaginationEngine;
use crate::room;
use crate::store::{MessageStore, OrderedCollection};

/// Orchestrates message sends and pulls.
///
/// Generic over `OrderedCollection` to maintain clean architecture
/// (pairchat-core never depends on pairchat-infra).
pub struct ChatService<C: OrderedCollection> {
    store: Arc<MessageStore<C>>,
    engine: PaginationEngine<C>,
}

impl<C: OrderedCollection> ChatService<C> {
    /// Create a chat service over the given message store.
    pub fn new(store: MessageStore<C>) -> Self {
        let store = Arc::new(store);
        Self {
            engine: PaginationEngine::new(Arc::clone(&store)),
            store,
        }
    }

    /// Access the message store.
    pub fn store(&self) -> &MessageStore<C> {
        &self.store
    }

    /// Send a message stamped with the current time.
    pub async fn send(&self, req: &SendRequest) -> Result<(), ChatError> {
        self.send_at(req, Utc::now().timestamp()).await
    }

    /// Send a message with an explicit send time (seconds since epoch).
    ///
    /// Membership is checked against the raw handle before the room is
    /// resolved; nothing touches the store unless both succeed.
    pub async fn send_at(&self, req: &SendRequest, sent_at: i64) -> Result<(), ChatError> {
        room::validate_membership(&req.chat, &req.sender)?;
        let room_key = room::resolve(&req.chat)?;

        let message = Message {
            sender: req.sender.clone(),
            text: req.text.clone(),
            sent_at,
        };
        self.store.append(&room_key, &message).await?;

        info!(room_key = %room_key, sender = %req.sender, "Message sent");
        Ok(())
    }

    /// Pull a page, defaulting absent cursor/limit/reverse.
    pub async fn pull(&self, req: &PullRequest) -> Result<Page, ChatError> {
        self.engine.pull(&req.chat, req.params()).await
    }

    /// Check that the backing store answers.
    pub async fn ping(&self) -> Result<(), ChatError> {
        self.store.ping().await
    }
}
