//! Conversation state machine and rendering pipeline for the shopchat widget.
//!
//! This crate defines the "ports" (the transport trait, the session backend
//! trait, the render surface trait) that the infrastructure and host layers
//! implement. It depends only on `shopchat-types` -- never on HTTP or
//! filesystem crates -- so the whole conversation flow is testable headless.

pub mod controller;
pub mod render;
pub mod session;
pub mod transcript;
pub mod transport;
