//! Infrastructure layer for shopchat.
//!
//! Contains implementations of the ports defined in `shopchat-core`:
//! the reqwest-backed chat transport, the file-backed session surface,
//! and the widget config loader.

pub mod config;
pub mod http;
pub mod session_file;

use anyhow::Context;

use std::path::PathBuf;

/// Resolve (and create) the widget data directory, `~/.shopchat`.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let dir = home.join(".shopchat");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("could not create data directory {}", dir.display()))?;
    Ok(dir)
}
