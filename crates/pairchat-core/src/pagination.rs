//! Cursor pagination over a room log.
//!
//! A pull for `limit` messages from `cursor` reads the inclusive window
//! `[cursor, cursor + limit]`, one position more than the page holds. If
//! that extra entry comes back the page reports `has_more` and hands out
//! `cursor + limit` as the next cursor; the extra entry itself is not
//! returned.
//!
//! The cursor is a position in the current order, not a message id. Appends
//! between pulls shift positions, and when many messages share a send time
//! a page boundary may skip or repeat one of them. The next cursor is kept
//! as `cursor + limit` regardless.

use std::sync::Arc;

use pairchat_types::chat::ChatMessage;
use pairchat_types::error::ChatError;
use pairchat_types::page::{Page, PullParams};
use tracing::debug;

use crate::room;
use crate::store::{MessageStore, OrderedCollection};

pub struct PaginationEngine<C: OrderedCollection> {
    store: Arc<MessageStore<C>>,
}

impl<C: OrderedCollection> PaginationEngine<C> {
    pub fn new(store: Arc<MessageStore<C>>) -> Self {
        Self { store }
    }

    /// Pull one page of the conversation named by `handle`.
    ///
    /// Messages are labelled with `handle` as given. A non-positive limit or
    /// a negative cursor yields an empty page; only a malformed handle or a
    /// store failure is an error.
    pub async fn pull(&self, handle: &str, params: PullParams) -> Result<Page, ChatError> {
        let room_key = room::resolve(handle)?;

        if params.limit <= 0 || params.cursor < 0 {
            return Ok(Page::empty());
        }

        let start = params.cursor;
        let end = start.saturating_add(params.limit);
        let entries = self
            .store
            .range_read(&room_key, start as u64, end as u64, params.reverse)
            .await?;

        let limit = params.limit as usize;
        let mut page = Page::empty();
        for message in entries {
            if page.messages.len() == limit {
                page.has_more = true;
                page.next_cursor = end;
                break;
            }
            page.messages.push(ChatMessage::from_stored(handle, message));
        }

        debug!(
            room_key = %room_key,
            cursor = start,
            limit = params.limit,
            reverse = params.reverse,
            returned = page.messages.len(),
            has_more = page.has_more,
            "Pulled page"
        );

        Ok(page)
    }
}
