use std::{thread::sleep, time::Duration};

use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder, Response},
};

use crate::{
    Res, config,
    error::Error,
    spotify::{Catalog, playlist, search},
    types::{
        ApiErrorResponse, CurrentUserResponse, Page, PlaylistRef, PlaylistSummary, Token,
        TrackMatch,
    },
    warning,
};

const MAX_RETRIES: u32 = 3;
const MAX_RETRY_AFTER_SECS: u64 = 120;
const BAD_GATEWAY_DELAY_SECS: u64 = 10;

/// Blocking Spotify Web API client bound to one access token.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: Token,
}

impl SpotifyClient {
    pub fn new(token: Token) -> Self {
        Self::with_api_url(token, config::spotify_api_url())
    }

    pub fn with_api_url(token: Token, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sends an authenticated request built by `build`.
    ///
    /// # Retry Logic
    ///
    /// - 429 Too Many Requests: waits for `Retry-After` seconds (default 1)
    ///   when the delay is at most 120 seconds
    /// - 502 Bad Gateway: waits 10 seconds
    ///
    /// At most three retries are made. Any other non-success status is turned
    /// into [`Error::Api`] carrying the message from the Spotify error body.
    pub(crate) fn send<F>(&self, build: F) -> Res<Response>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let mut retries = 0;

        loop {
            let response = build(&self.http)
                .bearer_auth(&self.token.access_token)
                .send()?;
            let status = response.status();

            if retries < MAX_RETRIES {
                if status == StatusCode::TOO_MANY_REQUESTS {
                    let wait = retry_after(&response).unwrap_or(1);
                    if wait <= MAX_RETRY_AFTER_SECS {
                        warning!("Rate limited by Spotify, retrying in {}s", wait);
                        sleep(Duration::from_secs(wait));
                        retries += 1;
                        continue;
                    }
                    warning!("Rate limit delay of {}s is too long, giving up", wait);
                } else if status == StatusCode::BAD_GATEWAY {
                    sleep(Duration::from_secs(BAD_GATEWAY_DELAY_SECS));
                    retries += 1;
                    continue;
                }
            }

            return check_status(response);
        }
    }
}

fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Passes successful responses through and converts the rest into
/// [`Error::Api`].
pub(crate) fn check_status(response: Response) -> Res<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorResponse>(&text)
        .ok()
        .and_then(|body| body.error.message)
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            }
        });

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

impl Catalog for SpotifyClient {
    fn current_user_id(&self) -> Res<String> {
        let url = self.url("/me");
        let user: CurrentUserResponse = self.send(|http| http.get(&url))?.json()?;
        Ok(user.id)
    }

    fn playlists_page(&self, offset: u32, limit: u32) -> Res<Page<PlaylistSummary>> {
        playlist::page(self, offset, limit)
    }

    fn create_playlist(&self, user_id: &str, name: &str, public: bool) -> Res<PlaylistRef> {
        playlist::create(self, user_id, name, public)
    }

    fn replace_items(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        playlist::replace_items(self, playlist_id, uris)
    }

    fn add_items(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        playlist::add_items(self, playlist_id, uris)
    }

    fn search_track(&self, artist: &str, track: &str) -> Res<TrackMatch> {
        search::first_track_uri(self, artist, track)
    }
}
