//! Configuration for the TIDAL client and the `tidalcat` binary.
//!
//! [`ClientConfig`] carries the fixed API coordinates (content type, API base
//! URL, OAuth token URL). It is built once and handed to every component
//! that talks to the API; tests point it at other hosts.
//!
//! The remaining functions read the credentials used by the command-line
//! interface from environment variables and `.env` files:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory

use std::{env, path::PathBuf};

use crate::Res;

/// Media type sent as `Content-Type` and `Accept` on every API request.
pub const TIDAL_CONTENT_TYPE: &str = "application/vnd.tidal.v1+json";

/// Base URL of the production TIDAL API.
pub const TIDAL_API_URL: &str = "https://openapi.tidal.com";

/// OAuth2 token endpoint used for the client-credentials exchange.
pub const TIDAL_OAUTH_URL: &str = "https://auth.tidal.com/v1/oauth2/token";

/// Country code used by the CLI when `TIDAL_COUNTRY_CODE` is not set.
pub const DEFAULT_COUNTRY_CODE: &str = "AU";

/// Immutable API coordinates shared by the authenticator and the transport.
///
/// # Example
///
/// ```
/// let config = ClientConfig {
///     api_url: "http://localhost:8080".to_string(),
///     ..ClientConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub content_type: String,
    pub api_url: String,
    pub oauth_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_type: TIDAL_CONTENT_TYPE.to_string(),
            api_url: TIDAL_API_URL.to_string(),
            oauth_url: TIDAL_OAUTH_URL.to_string(),
        }
    }
}

/// Loads environment variables from a `.env` file.
///
/// Looks for `tidalcat/.env` in the platform-specific local data directory
/// first and falls back to a `.env` file in the current working directory.
/// Variables that are already set in the environment are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tidalcat/.env`
/// - macOS: `~/Library/Application Support/tidalcat/.env`
/// - Windows: `%LOCALAPPDATA%/tidalcat/.env`
///
/// # Errors
///
/// Returns an error if a `.env` file exists but cannot be parsed. A missing
/// file is not an error; the credentials may come from the environment.
///
/// # Example
///
/// ```
/// use tidalcat::config;
///
/// fn main() {
///     if let Err(e) = config::load_env() {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tidalcat/.env");

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        return Ok(());
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!("Failed to load .env: {}", e).into()),
    }
}

/// Returns the TIDAL API client ID from `TIDAL_CLIENT_ID`.
pub fn tidal_client_id() -> Res<String> {
    required_var("TIDAL_CLIENT_ID")
}

/// Returns the TIDAL API client secret from `TIDAL_CLIENT_SECRET`.
///
/// The secret should be kept confidential and never exposed in logs or
/// version control.
pub fn tidal_client_secret() -> Res<String> {
    required_var("TIDAL_CLIENT_SECRET")
}

/// Returns the ISO 3166-1 alpha-2 country code from `TIDAL_COUNTRY_CODE`,
/// defaulting to [`DEFAULT_COUNTRY_CODE`].
pub fn tidal_country_code() -> String {
    env::var("TIDAL_COUNTRY_CODE")
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string())
}

fn required_var(name: &str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name).into()),
    }
}
