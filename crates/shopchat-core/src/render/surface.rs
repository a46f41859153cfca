//! Render surface: the mount-point contract between the widget core and its
//! host.
//!
//! The pipeline projects transcript entries into `RenderNode` values whose
//! bodies are already markup-safe; surfaces only lay them out. Hosts
//! implement `RenderSurface` (terminal in the CLI, DOM in a browser
//! embedding); `HtmlSurface` is the reference implementation producing an
//! HTML fragment, used by headless tests.

use shopchat_types::message::SuggestedAction;
use shopchat_types::order::OrderStatusClass;

/// Escaped, display-ready order card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub order_id: String,
    /// Badge text (e.g. "shipped", "out for delivery").
    pub status_label: String,
    pub status_class: OrderStatusClass,
    /// Timeline checkpoint labels, oldest first.
    pub timeline: Vec<String>,
    pub estimated_delivery: Option<String>,
}

/// One on-screen element produced by the pipeline.
///
/// Bodies are markup fragments with untrusted text already escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Visitor message: plain text, no markup interpretation.
    User { body: String },
    /// Bot message: formatted body, optionally with an order card beneath.
    Bot {
        body: String,
        order_card: Option<OrderCard>,
    },
    /// Centered, visually distinct widget notice.
    System { body: String },
}

/// Operations a host must provide for the widget to render into.
pub trait RenderSurface {
    /// Insert a new element after the existing ones.
    fn append_node(&mut self, node: RenderNode);

    /// Show or hide the typing indicator.
    fn set_typing(&mut self, typing: bool);

    /// Replace the quick-action affordance with the given actions.
    fn show_actions(&mut self, actions: &[SuggestedAction]);

    /// Remove the quick-action affordance.
    fn clear_actions(&mut self);

    /// Toggle widget visibility. Governs presentation only, never data.
    fn set_visible(&mut self, visible: bool);

    /// Bring the newest entry into view.
    fn scroll_to_latest(&mut self);
}

/// `RenderSurface` that accumulates an HTML fragment.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    html: String,
    typing: bool,
    actions: Vec<SuggestedAction>,
    visible: bool,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated message markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Quick actions currently on display.
    pub fn actions(&self) -> &[SuggestedAction] {
        &self.actions
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn push_card(html: &mut String, card: &OrderCard) {
        let class = card.status_class;
        html.push_str(&format!(r#"<div class="order-card status-{class}">"#));
        html.push_str(&format!(
            r#"<div class="order-card-header"><span class="order-id">{}</span><span class="badge badge-{class}">{}</span></div>"#,
            card.order_id, card.status_label
        ));
        if !card.timeline.is_empty() {
            html.push_str(r#"<ul class="order-timeline">"#);
            for checkpoint in &card.timeline {
                html.push_str(&format!("<li>{checkpoint}</li>"));
            }
            html.push_str("</ul>");
        }
        if let Some(eta) = &card.estimated_delivery {
            html.push_str(&format!(
                r#"<div class="order-eta">Estimated delivery: {eta}</div>"#
            ));
        }
        html.push_str("</div>");
    }
}

impl RenderSurface for HtmlSurface {
    fn append_node(&mut self, node: RenderNode) {
        match node {
            RenderNode::User { body } => {
                self.html
                    .push_str(&format!(r#"<div class="msg msg-user">{body}</div>"#));
            }
            RenderNode::Bot { body, order_card } => {
                self.html.push_str(r#"<div class="msg msg-bot">"#);
                self.html.push_str(&body);
                if let Some(card) = &order_card {
                    Self::push_card(&mut self.html, card);
                }
                self.html.push_str("</div>");
            }
            RenderNode::System { body } => {
                self.html
                    .push_str(&format!(r#"<div class="msg msg-system">{body}</div>"#));
            }
        }
    }

    fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    fn show_actions(&mut self, actions: &[SuggestedAction]) {
        self.actions = actions.to_vec();
    }

    fn clear_actions(&mut self) {
        self.actions.clear();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn scroll_to_latest(&mut self) {
        // The fragment has no viewport; nothing to do.
    }
}
