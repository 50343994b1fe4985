use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.locale-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP fetch settings.
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Page request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with the page request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 locale-checkr/0.1.0".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.locale-checkr/config.toml`
/// 3. `~/.config/locale-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".locale-checkr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("locale-checkr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.timeout_secs, 15);
        assert_eq!(config.http.user_agent, "Mozilla/5.0 locale-checkr/0.1.0");
    }

    #[test]
    fn test_override_file_replaces_only_set_keys() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "[http]\ntimeout_secs = 5\n").unwrap();

        let config = load_config(Some(f.path())).unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, "Mozilla/5.0 locale-checkr/0.1.0");
    }

    #[test]
    fn test_empty_toml_falls_back_to_defaults() {
        let f = NamedTempFile::new().unwrap();
        let config = load_config(Some(f.path())).unwrap();
        assert_eq!(config.http.timeout_secs, 15);
    }

    #[test]
    fn test_missing_override_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
