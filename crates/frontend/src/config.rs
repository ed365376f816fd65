use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const FRONTEND_VAR: &str = "HEADLINE_FRONTEND";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown frontend {0:?}, expected \"console\" or \"telegram\"")]
    UnknownFrontend(String),

    #[error("TELEGRAM_BOT_TOKEN must be set to run the telegram frontend")]
    MissingTelegramToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendKind {
    Console,
    Telegram,
}

impl fmt::Display for FrontendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendKind::Console => f.write_str("console"),
            FrontendKind::Telegram => f.write_str("telegram"),
        }
    }
}

impl FromStr for FrontendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "console" => Ok(FrontendKind::Console),
            "telegram" => Ok(FrontendKind::Telegram),
            _ => Err(ConfigError::UnknownFrontend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendConfig {
    Console,
    Telegram { token: String },
}

impl FrontendConfig {
    pub fn kind(&self) -> FrontendKind {
        match self {
            FrontendConfig::Console => FrontendKind::Console,
            FrontendConfig::Telegram { .. } => FrontendKind::Telegram,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frontend: FrontendConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup(FRONTEND_VAR) {
            Some(value) => value.parse()?,
            None => FrontendKind::Console,
        };

        let frontend = match kind {
            FrontendKind::Console => FrontendConfig::Console,
            FrontendKind::Telegram => {
                let token = lookup(TELEGRAM_TOKEN_VAR)
                    .filter(|token| !token.trim().is_empty())
                    .ok_or(ConfigError::MissingTelegramToken)?;
                FrontendConfig::Telegram { token }
            }
        };

        Ok(Self { frontend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_console() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.frontend, FrontendConfig::Console);
    }

    #[test]
    fn test_telegram_with_token() {
        let config = from_vars(&[
            (FRONTEND_VAR, "Telegram"),
            (TELEGRAM_TOKEN_VAR, "123:abc"),
        ])
        .unwrap();

        assert_eq!(
            config.frontend,
            FrontendConfig::Telegram {
                token: "123:abc".to_string()
            }
        );
        assert_eq!(config.frontend.kind(), FrontendKind::Telegram);
    }

    #[test]
    fn test_telegram_requires_token() {
        let err = from_vars(&[(FRONTEND_VAR, "telegram")]).unwrap_err();
        assert_eq!(err, ConfigError::MissingTelegramToken);

        let err = from_vars(&[
            (FRONTEND_VAR, "telegram"),
            (TELEGRAM_TOKEN_VAR, "  "),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingTelegramToken);
    }

    #[test]
    fn test_unknown_frontend() {
        let err = from_vars(&[(FRONTEND_VAR, "web")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFrontend("web".to_string()));
    }
}
