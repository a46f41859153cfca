//! Order-tracking metadata rendered as order cards.
//!
//! The backend reports a fairly rich status vocabulary
//! (pending/confirmed/processing/shipped/out_for_delivery/delivered/...).
//! The widget collapses it into three presentation classes for the status
//! badge; anything unrecognized falls back to `Processing`.

use serde::{Deserialize, Serialize};

use std::fmt;

/// One checkpoint in an order's status timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCheckpoint {
    pub status: String,
}

/// Order-tracking data attached to a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_id: String,
    /// Raw backend status string (e.g. "shipped", "out_for_delivery").
    pub status: String,
    /// Ordered status checkpoints, oldest first.
    #[serde(default)]
    pub timeline: Vec<TimelineCheckpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

impl OrderInfo {
    /// Presentation class for the status badge.
    pub fn status_class(&self) -> OrderStatusClass {
        OrderStatusClass::from_status(&self.status)
    }

    /// Human-readable badge text: the raw status with underscores spaced out.
    pub fn status_label(&self) -> String {
        self.status.replace('_', " ")
    }
}

/// Presentation category for an order status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusClass {
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatusClass {
    /// Map a raw backend status onto a badge class.
    ///
    /// Unrecognized statuses fall back to `Processing`.
    pub fn from_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "shipped" | "out_for_delivery" => OrderStatusClass::Shipped,
            "delivered" => OrderStatusClass::Delivered,
            _ => OrderStatusClass::Processing,
        }
    }
}

impl fmt::Display for OrderStatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatusClass::Processing => write!(f, "processing"),
            OrderStatusClass::Shipped => write!(f, "shipped"),
            OrderStatusClass::Delivered => write!(f, "delivered"),
        }
    }
}
