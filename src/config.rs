//! Configuration management for the playlist importer.
//!
//! This module loads configuration values from environment variables and
//! `.env` files and exposes them through small getter functions. The
//! configuration follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Res, error::Error, warning};

/// Environment variable holding the Spotify application client id.
pub const CLIENT_ID_VAR: &str = "SPOTIPY_CLIENT_ID";

/// Environment variable holding the Spotify application client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIPY_CLIENT_SECRET";

/// Environment variable overriding the OAuth redirect URI.
pub const REDIRECT_URI_VAR: &str = "SPOTIPY_REDIRECT_URI";

/// Environment variable holding a pre-issued bearer token.
pub const ACCESS_TOKEN_VAR: &str = "SPOTIFY_ACCESS_TOKEN";

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback/";

/// Permission needed to create, clear and extend a public playlist.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// first and then in the current working directory. Both files are optional.
/// Variables already present in the process environment are never
/// overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/playlist-importer/.env`
/// - macOS: `~/Library/Application Support/playlist-importer/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-importer/.env`
pub fn load_env() {
    let mut files = vec![env_file_path()];
    if let Ok(cwd) = env::current_dir() {
        files.push(cwd.join(".env"));
    }
    load_env_files(&files);
}

/// Loads every existing file of `paths` in order.
///
/// A file that cannot be parsed only produces a warning, and loading carries
/// on with the next one.
pub fn load_env_files(paths: &[PathBuf]) {
    for path in paths.iter().filter(|p| p.is_file()) {
        if let Err(e) = dotenv::from_path(path) {
            warning!("Ignoring {}: {}", path.display(), e);
        }
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-importer/.env");
    path
}

/// Application credentials used for the authorization code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    /// Reads credentials from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads credentials through `lookup`.
    ///
    /// The client id is checked before the client secret, and an empty value
    /// counts as missing.
    ///
    /// # Example
    ///
    /// ```
    /// let creds = Credentials::from_lookup(|key| match key {
    ///     "SPOTIPY_CLIENT_ID" => Some("id".to_string()),
    ///     "SPOTIPY_CLIENT_SECRET" => Some("secret".to_string()),
    ///     _ => None,
    /// })?;
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(Error::MissingEnv(key))
        };

        let client_id = required(CLIENT_ID_VAR)?;
        let client_secret = required(CLIENT_SECRET_VAR)?;
        let redirect_uri = lookup(REDIRECT_URI_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

/// Returns a pre-issued access token, if one is configured.
pub fn access_token() -> Option<String> {
    env::var(ACCESS_TOKEN_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Returns the Spotify Web API base URL.
///
/// Defaults to `https://api.spotify.com/v1`, overridable through
/// `SPOTIFY_API_URL`.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Defaults to `https://accounts.spotify.com/authorize`, overridable through
/// `SPOTIFY_AUTH_URL`.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Defaults to `https://accounts.spotify.com/api/token`, overridable through
/// `SPOTIFY_TOKEN_URL`.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
