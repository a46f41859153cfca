//! Widget configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.shopchat/` in
//! production) and deserializes it into [`WidgetConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::Path;

use shopchat_types::config::WidgetConfig;

/// Load widget configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`WidgetConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - Otherwise returns the parsed config.
pub async fn load_widget_config(data_dir: &Path) -> WidgetConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return WidgetConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return WidgetConfig::default();
        }
    };

    match toml::from_str::<WidgetConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            WidgetConfig::default()
        }
    }
}
