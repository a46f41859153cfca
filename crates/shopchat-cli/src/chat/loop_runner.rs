//! The interactive chat loop.

use std::path::Path;

use console::style;

use shopchat_core::controller::ConversationController;
use shopchat_infra::http::HttpChatClient;
use shopchat_infra::session_file::FileSessionBackend;
use shopchat_types::config::WidgetConfig;
use shopchat_types::error::WidgetError;
use shopchat_types::message::SuggestedAction;

use super::banner::print_welcome_banner;
use super::input::{ChatInput, InputEvent};
use super::surface::TermSurface;

/// Run an interactive chat session against the configured backend.
pub async fn run(config: WidgetConfig, data_dir: &Path) -> anyhow::Result<()> {
    let api_base = config.api_base.clone();
    let transport = HttpChatClient::new(api_base.clone());
    let backend = FileSessionBackend::new(data_dir);
    let surface = TermSurface::new();

    let mut controller = ConversationController::new(config, transport, backend, surface)?;
    controller.open();
    let session_id = controller.start()?;

    print_welcome_banner(&api_base, &session_id);

    let prompt = format!("{} ", style("You >").green().bold());
    let (mut input, _stdout) = ChatInput::new(prompt)
        .map_err(|e| WidgetError::MissingMount(format!("terminal input: {e}")))?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!();
                println!("  {}", style("Chat ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("  {}", style("Press Ctrl+D or type /exit to quit").dim());
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }
                match text.as_str() {
                    "/exit" | "/quit" => break,
                    "/help" => print_help(),
                    _ => {
                        let submission =
                            resolve_action(&text, controller.surface().current_actions());
                        // Validation rejections are silent, same as the widget.
                        let _ = controller.submit(&submission).await;
                    }
                }
            }
        }
    }

    controller.close();
    Ok(())
}

/// Map a bare number to the matching quick action's label.
fn resolve_action(text: &str, actions: &[SuggestedAction]) -> String {
    if let Ok(n) = text.parse::<usize>() {
        if n >= 1 && n <= actions.len() {
            return actions[n - 1].label.clone();
        }
    }
    text.to_string()
}

fn print_help() {
    println!();
    println!("  {}", style("Commands").bold());
    println!("  {}", style("/exit, /quit  end the chat").dim());
    println!("  {}", style("/help         show this help").dim());
    println!(
        "  {}",
        style("1, 2, ...     pick a quick action by number").dim()
    );
    println!();
}
