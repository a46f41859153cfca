//! Incremental projection of the transcript onto a render surface.
//!
//! The pipeline keeps a rendered-count cursor so each sync only projects
//! messages appended since the last one -- history is never re-rendered.
//! It also owns the initial quick-action affordance, which is removed
//! permanently once the first `user` message lands (one-way, survives
//! widget close/reopen).

use shopchat_types::message::{Message, Role, SuggestedAction};
use shopchat_types::order::OrderInfo;

use crate::render::format::format;
use crate::render::sanitize::escape;
use crate::render::surface::{OrderCard, RenderNode, RenderSurface};
use crate::transcript::Transcript;

/// Projects transcript appends into on-screen nodes.
#[derive(Debug)]
pub struct RenderPipeline {
    rendered: usize,
    initial_actions: Vec<SuggestedAction>,
    initial_dismissed: bool,
}

impl RenderPipeline {
    pub fn new(initial_actions: Vec<SuggestedAction>) -> Self {
        Self {
            rendered: 0,
            initial_actions,
            initial_dismissed: false,
        }
    }

    /// Project all messages past the cursor, then auto-scroll.
    ///
    /// The first `user` message dismisses the initial quick actions before
    /// anything else renders.
    pub fn sync<S: RenderSurface>(&mut self, transcript: &Transcript, surface: &mut S) {
        let messages = transcript.all();
        let pending = &messages[self.rendered..];
        if pending.is_empty() {
            return;
        }

        for message in pending {
            if message.role == Role::User && !self.initial_dismissed {
                self.initial_dismissed = true;
                surface.clear_actions();
            }
            surface.append_node(project(message));
        }

        self.rendered = messages.len();
        surface.scroll_to_latest();
    }

    /// Offer the initial quick actions, unless they were already dismissed.
    pub fn show_initial_actions<S: RenderSurface>(&self, surface: &mut S) {
        if !self.initial_dismissed && !self.initial_actions.is_empty() {
            surface.show_actions(&self.initial_actions);
        }
    }

    /// Whether the initial affordance has been permanently removed.
    pub fn initial_actions_dismissed(&self) -> bool {
        self.initial_dismissed
    }
}

/// Turn one message into its markup-safe node.
///
/// - `user`: escaped only, no markup interpretation
/// - `bot`: escaped, then markdown-lite formatted; order card beneath
/// - `system`: escaped banner text
fn project(message: &Message) -> RenderNode {
    match message.role {
        Role::User => RenderNode::User {
            body: escape(&message.content),
        },
        Role::Bot => RenderNode::Bot {
            body: format(&escape(&message.content)),
            order_card: message
                .metadata
                .as_ref()
                .and_then(|meta| meta.order_info.as_ref())
                .map(order_card),
        },
        Role::System => RenderNode::System {
            body: escape(&message.content),
        },
    }
}

/// Build the escaped card view for order metadata.
fn order_card(info: &OrderInfo) -> OrderCard {
    OrderCard {
        order_id: escape(&info.order_id),
        status_label: escape(&info.status_label()),
        status_class: info.status_class(),
        timeline: info.timeline.iter().map(|c| escape(&c.status)).collect(),
        estimated_delivery: info.estimated_delivery.as_deref().map(escape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use shopchat_types::message::MessageMeta;
    use shopchat_types::order::{OrderStatusClass, TimelineCheckpoint};

    use crate::render::surface::HtmlSurface;

    fn initial_actions() -> Vec<SuggestedAction> {
        vec![
            SuggestedAction::labeled("Track Order"),
            SuggestedAction::labeled("Returns"),
        ]
    }

    #[test]
    fn test_sync_is_incremental() {
        let mut pipeline = RenderPipeline::new(Vec::new());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        transcript.append(Message::bot("first"));
        pipeline.sync(&transcript, &mut surface);
        let after_first = surface.html().len();

        // No new messages: nothing is re-rendered.
        pipeline.sync(&transcript, &mut surface);
        assert_eq!(surface.html().len(), after_first);

        transcript.append(Message::bot("second"));
        pipeline.sync(&transcript, &mut surface);
        assert_eq!(surface.html().matches("msg-bot").count(), 2);
    }

    #[test]
    fn test_user_content_is_never_markup() {
        let mut pipeline = RenderPipeline::new(Vec::new());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        transcript.append(Message::user("**bold?** <script>x</script>"));
        pipeline.sync(&transcript, &mut surface);

        let html = surface.html();
        assert!(html.contains("**bold?**"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<strong>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_bot_content_is_escaped_then_formatted() {
        let mut pipeline = RenderPipeline::new(Vec::new());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        transcript.append(Message::bot("**Status** <img onerror=x>"));
        pipeline.sync(&transcript, &mut surface);

        let html = surface.html();
        assert!(html.contains("<strong>Status</strong>"));
        assert!(html.contains("&lt;img"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_order_card_projection() {
        let mut pipeline = RenderPipeline::new(Vec::new());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        let meta = MessageMeta {
            order_info: Some(OrderInfo {
                order_id: "ORD-2024-001".to_string(),
                status: "shipped".to_string(),
                timeline: vec![
                    TimelineCheckpoint {
                        status: "Packed".to_string(),
                    },
                    TimelineCheckpoint {
                        status: "Shipped".to_string(),
                    },
                ],
                estimated_delivery: None,
            }),
            ..Default::default()
        };
        transcript.append(Message::bot_with_meta("Your order is on the way", meta));
        pipeline.sync(&transcript, &mut surface);

        let html = surface.html();
        assert!(html.contains("badge-shipped"));
        assert!(html.contains(">shipped</span>"));
        assert!(html.contains("<li>Packed</li>"));
        assert_eq!(
            OrderStatusClass::from_status("shipped"),
            OrderStatusClass::Shipped
        );
    }

    #[test]
    fn test_initial_actions_shown_until_first_user_message() {
        let mut pipeline = RenderPipeline::new(initial_actions());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        pipeline.show_initial_actions(&mut surface);
        assert_eq!(surface.actions().len(), 2);

        transcript.append(Message::user("hello"));
        pipeline.sync(&transcript, &mut surface);
        assert!(surface.actions().is_empty());
        assert!(pipeline.initial_actions_dismissed());

        // One-way: asking again after dismissal shows nothing.
        pipeline.show_initial_actions(&mut surface);
        assert!(surface.actions().is_empty());
    }

    #[test]
    fn test_system_message_renders_banner() {
        let mut pipeline = RenderPipeline::new(Vec::new());
        let mut transcript = Transcript::new();
        let mut surface = HtmlSurface::new();

        transcript.append(Message::system("Connecting you with a human agent."));
        pipeline.sync(&transcript, &mut surface);
        assert!(surface.html().contains("msg-system"));
    }
}
