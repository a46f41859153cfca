//! Terminal render surface.
//!
//! Projects the pipeline's markup nodes onto the terminal: the formatter's
//! constrained vocabulary (`<strong>`, `<br>`, `<li>`, anchors, and the five
//! entities) is decoded into ANSI styling, order cards become indented
//! checkpoint lists, and quick actions print as a numbered row the user can
//! select by typing the number.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use shopchat_core::render::surface::{OrderCard, RenderNode, RenderSurface};
use shopchat_types::message::SuggestedAction;
use shopchat_types::order::OrderStatusClass;

use std::time::Duration;

/// `RenderSurface` implementation for an interactive terminal.
pub struct TermSurface {
    spinner: Option<ProgressBar>,
    actions: Vec<SuggestedAction>,
}

impl TermSurface {
    pub fn new() -> Self {
        Self {
            spinner: None,
            actions: Vec::new(),
        }
    }

    /// Quick actions currently on offer, in display order.
    pub fn current_actions(&self) -> &[SuggestedAction] {
        &self.actions
    }
}

impl RenderSurface for TermSurface {
    fn append_node(&mut self, node: RenderNode) {
        match node {
            // The readline prompt already echoed the user's input line.
            RenderNode::User { .. } => {}
            RenderNode::Bot { body, order_card } => {
                println!();
                println!(
                    "  {} {}",
                    style("Bot >").cyan().bold(),
                    render_markup(&body)
                );
                if let Some(card) = &order_card {
                    print_order_card(card);
                }
                println!();
            }
            RenderNode::System { body } => {
                println!();
                println!(
                    "  {}",
                    style(format!("-- {} --", decode_entities(&body))).magenta()
                );
                println!();
            }
        }
    }

    fn set_typing(&mut self, typing: bool) {
        if typing {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap(),
            );
            spinner.set_message("typing...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_actions(&mut self, actions: &[SuggestedAction]) {
        self.actions = actions.to_vec();
        let row = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("[{}] {}", i + 1, action.label))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", style(row).dim());
    }

    fn clear_actions(&mut self) {
        self.actions.clear();
    }

    fn set_visible(&mut self, _visible: bool) {
        // The terminal host has no hide/show affordance.
    }

    fn scroll_to_latest(&mut self) {
        // The terminal scrolls as output is printed.
    }
}

/// Decode the formatter's markup vocabulary into styled terminal text.
fn render_markup(markup: &str) -> String {
    let mut out = String::new();
    for (i, line) in markup.split("<br>").enumerate() {
        if i > 0 {
            out.push_str("\n  ");
        }
        match line
            .strip_prefix("<li>")
            .and_then(|rest| rest.strip_suffix("</li>"))
        {
            Some(item) => {
                out.push_str("  \u{2022} ");
                out.push_str(&render_inline(item));
            }
            None => out.push_str(&render_inline(line)),
        }
    }
    out
}

fn render_inline(line: &str) -> String {
    let emphasized = line
        .replace("<strong>", "\x1b[1m")
        .replace("</strong>", "\x1b[22m");
    decode_entities(&flatten_anchors(&emphasized))
}

/// `<a href="URL" ...>label</a>` -> `label (URL)`.
fn flatten_anchors(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find("<a href=\"") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 9..];
        let Some(url_end) = tail.find('"') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let url = &tail[..url_end];
        let Some(tag_end) = tail.find('>') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let after_tag = &tail[tag_end + 1..];
        let Some(label_end) = after_tag.find("</a>") else {
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&after_tag[..label_end]);
        out.push_str(&format!(" ({url})"));
        rest = &after_tag[label_end + 4..];
    }
    out.push_str(rest);
    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn print_order_card(card: &OrderCard) {
    let badge_text = format!("[{}]", decode_entities(&card.status_label));
    let badge = match card.status_class {
        OrderStatusClass::Processing => style(badge_text).yellow(),
        OrderStatusClass::Shipped => style(badge_text).cyan(),
        OrderStatusClass::Delivered => style(badge_text).green(),
    };
    println!();
    println!(
        "    {} {}  {}",
        style("Order").bold(),
        decode_entities(&card.order_id),
        badge.bold()
    );
    for checkpoint in &card.timeline {
        println!(
            "      {} {}",
            style("\u{2713}").green(),
            decode_entities(checkpoint)
        );
    }
    if let Some(eta) = &card.estimated_delivery {
        println!(
            "      {} {}",
            style("ETA:").dim(),
            style(decode_entities(eta)).dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities_order() {
        // &amp; is decoded last so entity prefixes are not re-interpreted.
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&lt;b&gt; &amp; &#39;x&#39;"), "<b> & 'x'");
    }

    #[test]
    fn test_flatten_anchors() {
        let markup = r#"see <a href="https://x.io/t" target="_blank" rel="noopener noreferrer">details</a> now"#;
        assert_eq!(flatten_anchors(markup), "see details (https://x.io/t) now");
    }

    #[test]
    fn test_render_markup_bullets_and_breaks() {
        let out = render_markup("Options:<br><li>Track</li><br><li>Return</li>");
        assert_eq!(out, "Options:\n    \u{2022} Track\n    \u{2022} Return");
    }

    #[test]
    fn test_render_markup_bold() {
        let out = render_markup("<strong>Status</strong>: shipped");
        assert_eq!(out, "\x1b[1mStatus\x1b[22m: shipped");
    }
}
