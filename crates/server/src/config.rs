use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse it, and store it in the global `OnceLock`.
/// Safe to call multiple times — only the first call has effect.
///
/// If the file is missing or unparseable everything falls back to defaults
/// (15-minute access tokens, 7-day refresh tokens, no demo seeding).
pub fn load_config() {
    dotenvy::dotenv().ok();
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e} — using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}) — using defaults");
            AppConfig::default()
        }
    });
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't been
/// called yet (safe fallback).
pub fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
