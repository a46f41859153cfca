//! Shared domain types for the shopchat support widget.
//!
//! This crate contains the types used across the widget core: transcript
//! messages, order-tracking metadata, the wire contract with the chat
//! backend, widget configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod order;
pub mod wire;
