use std::path::PathBuf;

use crate::{
    Res, config,
    config::Credentials,
    info,
    spotify::{
        SpotifyClient,
        auth::{CredentialProvider, InteractiveCodeFlow, StaticToken},
    },
    tracklist,
    types::CsvRow,
    workflow::{self, ImportReport},
};

/// What to import and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub playlist: String,
    pub csv: PathBuf,
    pub open_browser: bool,
}

impl ImportOptions {
    pub fn new(playlist: impl Into<String>, csv: impl Into<PathBuf>) -> Self {
        Self {
            playlist: playlist.into(),
            csv: csv.into(),
            open_browser: false,
        }
    }
}

/// Input checked before anything touches the network.
#[derive(Debug, Clone)]
pub struct PreparedImport {
    pub credentials: Credentials,
    pub rows: Vec<CsvRow>,
}

/// Validates credentials and reads the CSV.
///
/// Credentials are checked first, so a missing `SPOTIPY_CLIENT_ID` or
/// `SPOTIPY_CLIENT_SECRET` fails without opening the CSV or contacting
/// Spotify.
pub fn prepare<F>(options: &ImportOptions, lookup: F) -> Res<PreparedImport>
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::from_lookup(lookup)?;
    let rows = tracklist::read_rows(&options.csv)?;
    info!("Read {} rows from {}", rows.len(), options.csv.display());

    Ok(PreparedImport { credentials, rows })
}

/// Runs a complete import against Spotify.
///
/// Uses the token from `SPOTIFY_ACCESS_TOKEN` when it is set and the
/// interactive authorization code flow on standard input otherwise.
pub fn import(options: &ImportOptions) -> Res<ImportReport> {
    let prepared = prepare(options, |key| std::env::var(key).ok())?;

    let mut provider: Box<dyn CredentialProvider> = match config::access_token() {
        Some(token) => Box::new(StaticToken::new(token)),
        None => Box::new(InteractiveCodeFlow::stdin(
            prepared.credentials.clone(),
            options.open_browser,
        )),
    };

    import_with(options, &prepared.rows, provider.as_mut())
}

/// Authenticates through `provider` and runs the workflow for `rows`.
pub fn import_with(
    options: &ImportOptions,
    rows: &[CsvRow],
    provider: &mut dyn CredentialProvider,
) -> Res<ImportReport> {
    let token = provider.access_token()?;
    let client = SpotifyClient::new(token);

    workflow::run(&client, &options.playlist, rows)
}
