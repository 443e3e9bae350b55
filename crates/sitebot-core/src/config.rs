//! Startup configuration — resolved once and passed by reference.
//!
//! Resolution order for every knob: explicit value (CLI flag), then
//! environment variable, then built-in default. The bot token has no
//! default and is required.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const ALLOW_LIST_ENV: &str = "AUTHORIZED_USER_IDS";

pub const DEFAULT_DATA_FILE: &str = "content-data.json";
pub const DEFAULT_UPLOAD_DIR: &str = "uploaded_images";

#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// Caller ids allowed to issue commands. Empty means open mode:
    /// everyone is allowed.
    pub allowed_users: HashSet<i64>,
    pub data_file: PathBuf,
    pub upload_dir: PathBuf,
}

impl Config {
    /// Build the config from optional explicit values, falling back to the
    /// environment.
    pub fn resolve(
        token: Option<String>,
        allow_list: Option<String>,
        data_file: Option<PathBuf>,
        upload_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let bot_token = token
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config(format!("bot token required (set {})", TOKEN_ENV)))?;

        let raw_allow = allow_list.or_else(|| std::env::var(ALLOW_LIST_ENV).ok());
        let allowed_users = match raw_allow {
            Some(raw) => parse_allow_list(&raw)?,
            None => HashSet::new(),
        };

        Ok(Self {
            bot_token,
            allowed_users,
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            upload_dir: upload_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
        })
    }

    /// Empty allow-set means unrestricted access, by design.
    pub fn is_authorized(&self, user_id: i64) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.contains(&user_id)
    }
}

/// Parse a comma-separated id list, ignoring empty entries.
pub fn parse_allow_list(raw: &str) -> Result<HashSet<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| Error::config(format!("invalid user id in allow-list: {:?}", s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_allow(raw: &str) -> Config {
        Config {
            bot_token: "test-token".into(),
            allowed_users: parse_allow_list(raw).unwrap(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
        }
    }

    #[test]
    fn parse_allow_list_basics() {
        assert_eq!(parse_allow_list("").unwrap(), HashSet::new());
        assert_eq!(
            parse_allow_list("123, 456,,789").unwrap(),
            HashSet::from([123, 456, 789])
        );
        assert!(parse_allow_list("123,abc").is_err());
    }

    #[test]
    fn empty_allow_set_is_open_mode() {
        let config = config_with_allow("");
        assert!(config.is_authorized(42));
        assert!(config.is_authorized(-1));
    }

    #[test]
    fn non_empty_allow_set_restricts() {
        let config = config_with_allow("100,200");
        assert!(config.is_authorized(100));
        assert!(!config.is_authorized(300));
    }
}
