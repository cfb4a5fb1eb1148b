//! Configuration module for the fitness bot.
//!
//! Loads configuration from environment variables (and `.env`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bot running mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("failed to read database credentials from {path}: {source}")]
    CredentialsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,
    pub webhook_url: Option<String>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,

    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// How long an unfinished onboarding survives without any answer.
    /// `None` keeps it until the user finishes or cancels.
    pub onboarding_idle: Option<Duration>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = var("BOT_TOKEN")
            .or_else(|| var("TELEGRAM_BOT_TOKEN"))
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let bot_mode = match var("BOT_MODE")
            .unwrap_or_else(|| "polling".to_string())
            .to_lowercase()
            .as_str()
        {
            "polling" => BotMode::Polling,
            "webhook" => BotMode::Webhook,
            other => {
                return Err(ConfigError::Invalid {
                    key: "BOT_MODE",
                    message: format!("expected `polling` or `webhook`, got `{other}`"),
                });
            }
        };

        let webhook_url = var("WEBHOOK_URL");
        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::Missing("WEBHOOK_URL"));
        }

        let webhook_port = match var("WEBHOOK_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "WEBHOOK_PORT",
                message: e.to_string(),
            })?,
            None => 8443,
        };

        let mongodb_uri = match var("MONGODB_URI") {
            Some(uri) => uri,
            None => {
                let path = var("MONGODB_CREDENTIALS_PATH")
                    .map(PathBuf::from)
                    .ok_or(ConfigError::Missing("MONGODB_URI or MONGODB_CREDENTIALS_PATH"))?;
                read_credentials(path)?
            }
        };

        let onboarding_idle = match var("ONBOARDING_IDLE_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "ONBOARDING_IDLE_SECS",
                    message: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: "ONBOARDING_IDLE_SECS",
                        message: "must be greater than zero".to_string(),
                    });
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            bot_token,
            bot_mode,
            webhook_url,
            webhook_port,
            webhook_secret: var("WEBHOOK_SECRET"),
            mongodb_uri,
            mongodb_database: var("MONGODB_DATABASE").unwrap_or_else(|| "fitbot".to_string()),
            onboarding_idle,
        })
    }
}

/// Read the connection string stored in a credentials file.
fn read_credentials(path: PathBuf) -> Result<String, ConfigError> {
    let contents = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::CredentialsFile { path: path.clone(), source })?;

    let uri = contents.trim().to_string();
    if uri.is_empty() {
        return Err(ConfigError::Invalid {
            key: "MONGODB_CREDENTIALS_PATH",
            message: format!("{} is empty", path.display()),
        });
    }
    Ok(uri)
}
