//! Widget configuration.
//!
//! `WidgetConfig` represents the `config.toml` that controls the backend
//! endpoint, submission limits, and the widget's fixed texts. All fields
//! have sensible defaults so an empty (or missing) file works out of the box.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a widget instance.
///
/// Loaded from `~/.shopchat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the chat backend (the widget appends `/chat/`).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Communication channel reported to the backend.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Maximum submission length in characters; longer input is silently
    /// rejected.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,

    /// Bot greeting appended to an empty transcript on startup.
    /// Set to an empty string to disable.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Fixed bot message shown when the backend call fails.
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,

    /// System notice appended when the backend signals escalation.
    #[serde(default = "default_escalation_notice")]
    pub escalation_notice: String,

    /// Quick-action labels offered before the first user message.
    #[serde(default = "default_initial_actions")]
    pub initial_actions: Vec<String>,
}

fn default_api_base() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_channel() -> String {
    "web".to_string()
}

fn default_max_message_len() -> usize {
    // Matches the backend's request validation limit.
    4000
}

fn default_greeting() -> String {
    "Hi! I'm your support assistant. I can help with order tracking, returns, and shipping questions.".to_string()
}

fn default_fallback_text() -> String {
    "Sorry, I'm having trouble connecting right now. Please try again in a moment, or type \"human\" to reach a support agent.".to_string()
}

fn default_escalation_notice() -> String {
    "Connecting you with a human agent. Hang tight!".to_string()
}

fn default_initial_actions() -> Vec<String> {
    vec![
        "Track Order".to_string(),
        "Returns".to_string(),
        "Shipping Info".to_string(),
    ]
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            channel: default_channel(),
            max_message_len: default_max_message_len(),
            greeting: default_greeting(),
            fallback_text: default_fallback_text(),
            escalation_notice: default_escalation_notice(),
            initial_actions: default_initial_actions(),
        }
    }
}
