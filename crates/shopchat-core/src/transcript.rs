//! Append-only conversation transcript.
//!
//! The transcript is the single source of truth for what has been shown.
//! Messages are never mutated or removed after insertion; any snapshot is a
//! strict prefix-extension of every earlier snapshot. Retention is unbounded
//! (demo scope).

use shopchat_types::message::{Message, Role};

/// Ordered log of exchanged messages.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    seen_user: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the end of the sequence. Never fails.
    pub fn append(&mut self, message: Message) {
        if message.role == Role::User {
            self.seen_user = true;
        }
        self.messages.push(message);
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether any `user` message has ever been appended.
    ///
    /// One-way: stays true for the lifetime of the transcript. Drives the
    /// permanent removal of the initial quick-action affordance.
    pub fn has_user_message(&self) -> bool {
        self.seen_user
    }
}
