//! Client configuration: optional TOML file as the base, CLI flags and
//! environment variables override.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for the Aula backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Bearer token for the signed-in student. Minting tokens is the login
    /// surface's job; the client only carries one.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Resolve the effective configuration.
///
/// File settings are the base; `api_url` and `token` (from flags or env)
/// override them. An unreadable or unparsable file degrades to defaults with
/// a warning rather than aborting.
pub fn resolve(
    config_path: Option<&Path>,
    api_url: Option<String>,
    token: Option<String>,
) -> ClientConfig {
    let mut config = match config_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ClientConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", path.display());
                    cfg
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using defaults");
                    ClientConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using defaults",
                    path.display()
                );
                ClientConfig::default()
            }
        },
        None => ClientConfig::default(),
    };

    if let Some(url) = api_url {
        config.base_url = url;
    }
    if let Some(token) = token {
        config.token = Some(token);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = resolve(None, None, None);
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.token, None);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_file_then_flag_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"https://api.aula.example\"\ntimeout_secs = 10"
        )
        .unwrap();

        let config = resolve(Some(file.path()), None, Some("tok".into()));
        assert_eq!(config.base_url, "https://api.aula.example");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.token.as_deref(), Some("tok"));

        let config = resolve(Some(file.path()), Some("https://other".into()), None);
        assert_eq!(config.base_url, "https://other");
    }

    #[test]
    fn test_unparsable_file_degrades_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        let config = resolve(Some(file.path()), None, None);
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }
}
