//! Client configuration.
//!
//! Resolves the memo service base URL and the location of the offline memo
//! blob from environment variables.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the memo service base URL.
pub const API_URL_ENV: &str = "MEMO_API_URL";
/// Environment variable overriding the offline memo file.
pub const STORAGE_PATH_ENV: &str = "MEMO_STORAGE_PATH";
/// Base URL used when `MEMO_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const APP_DIR_NAME: &str = "memo-pad";
const STORAGE_FILE_NAME: &str = "memos.json";

/// Runtime configuration shared by all clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Memo service base URL, without a trailing slash
    pub api_base_url: String,
    /// File holding the offline memo collection
    pub storage_path: PathBuf,
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = normalize_text_option(lookup(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = normalize_base_url(&api_base_url)?;

        let storage_path = match normalize_text_option(lookup(STORAGE_PATH_ENV)) {
            Some(path) => PathBuf::from(path),
            None => default_storage_path()?,
        };

        Ok(Self {
            api_base_url,
            storage_path,
        })
    }
}

/// Default offline memo file under the platform data directory.
pub fn default_storage_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
        .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
}

/// Validate a base URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
