use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while importing a CSV into a playlist.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("{0} must be set")]
    MissingEnv(&'static str),

    /// The CSV header lacks `Artist` or `Track`.
    #[error("CSV header is missing the required column `{0}`")]
    MissingColumn(&'static str),

    /// The CSV file could not be opened or a record could not be decoded.
    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The authorization flow was refused, aborted, or the code exchange failed.
    #[error("Authorization failed: {0}")]
    Auth(String),

    /// Spotify answered with a non-success status.
    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure, or a response body that did not decode.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Missing environment or malformed input detected before any network call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingEnv(_) | Error::MissingColumn(_))
    }
}
