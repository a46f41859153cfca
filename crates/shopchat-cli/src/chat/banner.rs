//! Welcome banner for a chat session.

use console::style;

/// Print the startup banner: backend endpoint, session, and usage hints.
pub fn print_welcome_banner(api_base: &str, session_id: &str) {
    println!();
    println!("  {}", style("Support Chat").cyan().bold());
    println!(
        "  {}",
        style("Order tracking, returns, and shipping questions, 24/7.").dim()
    );
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(api_base).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type a message, a quick-action number, or /exit to quit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
