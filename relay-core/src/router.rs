//! Conversation router: maps admin-facing message ids to the user conversation they came from,
//! and keeps the set of blocked user chats.
//!
//! Pure in-memory state, no I/O. All state lives in one table behind a single mutex, so
//! `remove_link` is an atomic read+delete and record/lookup pairs never interleave with a
//! concurrent removal of the same key. The lock is never held across an `.await`.
//!
//! Links are never expired: the table grows with every relayed message until a conversation
//! is closed.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One routable exchange: the admin-facing message and the user message it relays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLink {
    pub admin_message_id: String,
    pub user_chat_id: i64,
    pub user_message_id: String,
}

#[derive(Debug, Default)]
struct RouterState {
    links: HashMap<String, ConversationLink>,
    blocked: HashSet<i64>,
}

/// Routing table plus blocked set, shared by handle (e.g. `Arc<ConversationRouter>`).
#[derive(Debug, Default)]
pub struct ConversationRouter {
    state: Mutex<RouterState>,
}

impl ConversationRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation leaves the state consistent, so a poisoned lock is safe to reuse.
    fn state(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a link keyed by `admin_message_id`. An existing link for the key is overwritten.
    pub fn record_link(&self, admin_message_id: &str, user_chat_id: i64, user_message_id: &str) {
        let link = ConversationLink {
            admin_message_id: admin_message_id.to_string(),
            user_chat_id,
            user_message_id: user_message_id.to_string(),
        };
        let previous = self.state().links.insert(admin_message_id.to_string(), link);
        debug!(
            admin_message_id = %admin_message_id,
            user_chat_id = user_chat_id,
            overwritten = previous.is_some(),
            "Link recorded"
        );
    }

    /// Returns the link for `admin_message_id`, or `None` if the message is not routable.
    pub fn lookup_link(&self, admin_message_id: &str) -> Option<ConversationLink> {
        self.state().links.get(admin_message_id).cloned()
    }

    /// Removes and returns the link for `admin_message_id`; `None` leaves the table unchanged.
    pub fn remove_link(&self, admin_message_id: &str) -> Option<ConversationLink> {
        self.state().links.remove(admin_message_id)
    }

    /// Blocks a user chat. Idempotent. Existing links for the chat are kept.
    pub fn block_user(&self, user_chat_id: i64) {
        let newly_blocked = self.state().blocked.insert(user_chat_id);
        debug!(user_chat_id = user_chat_id, newly_blocked = newly_blocked, "User blocked");
    }

    pub fn is_blocked(&self, user_chat_id: i64) -> bool {
        self.state().blocked.contains(&user_chat_id)
    }

    /// Number of live links.
    pub fn link_count(&self) -> usize {
        self.state().links.len()
    }
}
