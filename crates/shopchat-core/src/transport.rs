//! Outbound transport port.
//!
//! One request per call, no built-in retry, no widget-side cancellation.
//! The HTTP implementation lives in `shopchat-infra`; tests use in-crate
//! mocks. Uses RPITIT (native async fn in traits, Rust 2024 edition).

use shopchat_types::error::TransportError;
use shopchat_types::wire::{ChatRequest, ChatReply};

/// Trait for the single outbound call to the chat backend.
pub trait ChatTransport: Send + Sync {
    /// Send one chat turn and wait for the structured reply.
    ///
    /// Transport-level failures and non-success status codes both surface
    /// as `TransportError`; the caller collapses them into one outcome.
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatReply, TransportError>> + Send;
}
