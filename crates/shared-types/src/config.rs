use serde::{Deserialize, Serialize};

fn default_access_token_minutes() -> i64 {
    15
}

fn default_refresh_token_days() -> i64 {
    7
}

/// Auth token lifetimes, overridable from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_access_token_minutes")]
    pub access_token_minutes: i64,
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_token_minutes: default_access_token_minutes(),
            refresh_token_days: default_refresh_token_days(),
        }
    }
}

/// Demo-data controls. Everything defaults off so a missing config file
/// leaves the store empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub seed: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.session.access_token_minutes, 15);
        assert_eq!(config.session.refresh_token_days, 7);
        assert!(!config.demo.seed);
    }

    #[test]
    fn partial_session_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[session]\naccess_token_minutes = 5\n").unwrap();
        assert_eq!(config.session.access_token_minutes, 5);
        assert_eq!(config.session.refresh_token_days, 7);
    }
}
