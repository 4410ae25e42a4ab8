use anyhow::{Context, bail};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub spotify: SpotifyConfig,
}

/// Spotify app credentials for the client-credentials grant.
#[derive(Deserialize, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never end up in logs, so Debug is written by hand.
impl fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Loads credentials from the TOML file at `path`, letting the
    /// `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` environment variables
    /// override file values. When both variables are set the file does not
    /// have to exist.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let env_id = non_empty_env(CLIENT_ID_ENV);
        let env_secret = non_empty_env(CLIENT_SECRET_ENV);

        let file = if env_id.is_some() && env_secret.is_some() {
            None
        } else {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            Some(toml::from_str(&contents).context("failed to parse config TOML")?)
        };

        Self::resolve(file, env_id, env_secret)
    }

    fn resolve(
        file: Option<Config>,
        env_id: Option<String>,
        env_secret: Option<String>,
    ) -> anyhow::Result<Config> {
        let (file_id, file_secret) = match file {
            Some(cfg) => (Some(cfg.spotify.client_id), Some(cfg.spotify.client_secret)),
            None => (None, None),
        };

        let client_id = env_id.or(file_id).unwrap_or_default();
        let client_secret = env_secret.or(file_secret).unwrap_or_default();

        if client_id.is_empty() || client_secret.is_empty() {
            bail!("spotify client_id and client_secret must both be set");
        }

        Ok(Config {
            spotify: SpotifyConfig {
                client_id,
                client_secret,
            },
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(id: &str, secret: &str) -> Config {
        Config {
            spotify: SpotifyConfig {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
            },
        }
    }

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
[spotify]
client_id = "abc123"
client_secret = "shh"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.spotify.client_id, "abc123");
        assert_eq!(cfg.spotify.client_secret, "shh");

        Ok(())
    }

    #[test]
    fn test_file_values_used_without_env() -> anyhow::Result<()> {
        let cfg = Config::resolve(Some(file_config("id", "secret")), None, None)?;

        assert_eq!(cfg.spotify.client_id, "id");
        assert_eq!(cfg.spotify.client_secret, "secret");

        Ok(())
    }

    #[test]
    fn test_env_overrides_file() -> anyhow::Result<()> {
        let cfg = Config::resolve(
            Some(file_config("file-id", "file-secret")),
            Some("env-id".to_string()),
            None,
        )?;

        assert_eq!(cfg.spotify.client_id, "env-id");
        assert_eq!(cfg.spotify.client_secret, "file-secret");

        Ok(())
    }

    #[test]
    fn test_env_alone_suffices() -> anyhow::Result<()> {
        let cfg = Config::resolve(None, Some("id".to_string()), Some("secret".to_string()))?;

        assert_eq!(cfg.spotify.client_id, "id");

        Ok(())
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(Config::resolve(Some(file_config("", "secret")), None, None).is_err());
        assert!(Config::resolve(None, None, None).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cfg = file_config("id", "secret");
        let printed = format!("{:?}", cfg.spotify);

        assert!(printed.contains("id"));
        assert!(!printed.contains("\"secret\""));
        assert!(printed.contains("<redacted>"));
    }
}
