//! Wire contract with the chat backend.
//!
//! One outbound call: `POST {api_base}/chat/` with a JSON `ChatRequest`,
//! answered by a JSON `ChatReply`. Field names are the backend's snake_case
//! vocabulary; optional fields the widget does not act on (`status`,
//! `confidence`, `sources`) are still deserialized so real backend payloads
//! parse without modification.

use serde::{Deserialize, Serialize};

use crate::message::SuggestedAction;
use crate::order::OrderInfo;

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    /// Communication channel, "web" for the widget.
    pub channel: String,
}

/// Successful response from the chat endpoint.
///
/// Only `response` is required. A differing `session_id` triggers session
/// migration in the widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub escalate: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<SuggestedAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,

    /// Conversation status ("active"/"escalated"/"closed"). Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Backend confidence score in [0, 1]. Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// RAG source documents the backend consulted. Informational.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_snake_case() {
        let request = ChatRequest {
            message: "track my order".to_string(),
            session_id: "sess_abc123".to_string(),
            channel: "web".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"session_id\":\"sess_abc123\""));
        assert!(json.contains("\"channel\":\"web\""));
    }

    #[test]
    fn test_reply_minimal() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": "Hello!"}"#).unwrap();
        assert_eq!(reply.response, "Hello!");
        assert!(reply.session_id.is_none());
        assert!(!reply.escalate);
        assert!(reply.suggested_actions.is_empty());
        assert!(reply.order_info.is_none());
    }

    #[test]
    fn test_reply_full_backend_shape() {
        // Shape produced by the demo backend.
        let json = r#"{
            "response": "Your order is on the way",
            "session_id": "sess_abc123",
            "status": "active",
            "confidence": 0.92,
            "sources": ["order_tracking_system"],
            "suggested_actions": [
                {"label": "Track Another Order", "action": "track_order"},
                {"label": "Contact Support", "action": "human"}
            ],
            "escalate": false,
            "order_info": {
                "order_id": "ORD-2024-001",
                "status": "shipped",
                "timeline": [{"status": "Packed"}, {"status": "Shipped"}],
                "estimated_delivery": "January 20, 2024"
            }
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("sess_abc123"));
        assert_eq!(reply.suggested_actions.len(), 2);
        assert_eq!(reply.suggested_actions[0].label, "Track Another Order");
        let info = reply.order_info.unwrap();
        assert_eq!(info.order_id, "ORD-2024-001");
        assert_eq!(reply.sources, vec!["order_tracking_system"]);
    }

    #[test]
    fn test_reply_escalation() {
        let json = r#"{"response": "Connecting you now.", "escalate": true, "status": "escalated"}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert!(reply.escalate);
        assert_eq!(reply.status.as_deref(), Some("escalated"));
    }
}
