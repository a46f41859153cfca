//! Transcript message types.
//!
//! A conversation transcript is an append-only sequence of `Message` values.
//! Insertion order is authoritative; the timestamp is captured for display
//! only and never drives ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::order::OrderInfo;

/// Who produced a transcript message.
///
/// Fixed, exhaustive set: the visitor (`user`), the assistant (`bot`), and
/// widget-generated notices (`system`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
            Role::System => write!(f, "system"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "bot" => Ok(Role::Bot),
            "system" => Ok(Role::System),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// A backend-proposed quick reply the user can select instead of typing.
///
/// Selecting an action behaves identically to submitting its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub label: String,
    /// Backend routing hint. Carried for wire-contract fidelity; the widget
    /// only ever acts on `label`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl SuggestedAction {
    /// Build a label-only action (the form the widget itself creates).
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }
}

/// Structured payload attached to a bot message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageMeta {
    /// Order-tracking data, rendered as an order card beneath the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,

    /// Backend signal that the conversation is being handed to a human.
    #[serde(default)]
    pub escalate: bool,

    /// Quick replies surfaced as an ephemeral affordance, never as a
    /// transcript entry of their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<SuggestedAction>,
}

impl MessageMeta {
    /// Whether the payload carries nothing worth attaching.
    pub fn is_empty(&self) -> bool {
        self.order_info.is_none() && !self.escalate && self.suggested_actions.is_empty()
    }
}

/// A single entry in the conversation transcript.
///
/// Messages are never mutated or removed after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Wall-clock capture time, for display only.
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMeta>,
}

impl Message {
    fn new(role: Role, content: String, metadata: Option<MessageMeta>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content,
            timestamp: Utc::now(),
            metadata,
        }
    }

    /// A visitor message (raw text, never markup-interpreted).
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    /// A bot message without structured payload.
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Role::Bot, content.into(), None)
    }

    /// A bot message with attached metadata. Empty payloads are dropped.
    pub fn bot_with_meta(content: impl Into<String>, meta: MessageMeta) -> Self {
        let metadata = if meta.is_empty() { None } else { Some(meta) };
        Self::new(Role::Bot, content.into(), metadata)
    }

    /// A widget-generated notice (e.g. human hand-off).
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content.into(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Bot, Role::System] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Role::User);
    }

    #[test]
    fn test_role_from_str_invalid() {
        assert!("assistant".parse::<Role>().is_err());
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
        assert!(msg.metadata.is_none());

        let msg = Message::system("hand-off");
        assert_eq!(msg.role, Role::System);
    }

    #[test]
    fn test_bot_with_empty_meta_drops_payload() {
        let msg = Message::bot_with_meta("hi", MessageMeta::default());
        assert!(msg.metadata.is_none());
    }

    #[test]
    fn test_bot_with_meta_keeps_payload() {
        let meta = MessageMeta {
            escalate: true,
            ..Default::default()
        };
        let msg = Message::bot_with_meta("hi", meta);
        assert!(msg.metadata.unwrap().escalate);
    }

    #[test]
    fn test_suggested_action_parses_backend_shape() {
        // The demo backend sends {label, action}; only label drives behavior.
        let action: SuggestedAction =
            serde_json::from_str(r#"{"label": "Track Order", "action": "track_order"}"#).unwrap();
        assert_eq!(action.label, "Track Order");
        assert_eq!(action.action.as_deref(), Some("track_order"));
    }
}
