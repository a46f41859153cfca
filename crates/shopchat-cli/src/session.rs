//! `shopchat session` subcommands.

use std::path::Path;

use console::style;

use shopchat_core::session::SessionBackend;
use shopchat_infra::session_file::FileSessionBackend;

/// Print the persisted session identifier.
pub fn show(data_dir: &Path) -> anyhow::Result<()> {
    let backend = FileSessionBackend::new(data_dir);
    match backend.read()? {
        Some(id) => {
            println!("  {} {}", style("Session:").bold(), id);
        }
        None => {
            println!("  {}", style("No persisted session.").dim());
        }
    }
    Ok(())
}

/// Forget the persisted session identifier.
pub fn reset(data_dir: &Path) -> anyhow::Result<()> {
    let backend = FileSessionBackend::new(data_dir);
    backend.clear()?;
    println!(
        "  {}",
        style("Session cleared. The next chat starts fresh.").green()
    );
    Ok(())
}
