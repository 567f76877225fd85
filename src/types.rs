use serde::{Deserialize, Serialize};

/// Bearer credential attached to every Spotify Web API request.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
}

/// A playlist the import writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

/// One entry of the current user's playlist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

impl From<PlaylistSummary> for PlaylistRef {
    fn from(summary: PlaylistSummary) -> Self {
        PlaylistRef {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// A single `Artist`/`Track` row of the input CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Track")]
    pub track: String,
}

impl CsvRow {
    /// Creates a row from an artist and a track title.
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        CsvRow {
            artist: artist.into(),
            track: track.into(),
        }
    }
}

/// Catalog identifier of a resolved row, `None` for a miss.
pub type TrackMatch = Option<String>;

/// One page of an offset-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Usable entries of the page.
    pub items: Vec<T>,
    /// Number of entries the server returned, including `null` ones that
    /// were dropped from `items`.
    pub fetched: u32,
    /// Offset the page starts at.
    pub offset: u32,
    /// Whether the server advertised a following page.
    pub has_next: bool,
}

/// Response of the token endpoint for the authorization code grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Response of `GET /me`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
}

/// Response of `GET /me/playlists`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Option<Playlist>>,
    pub offset: u32,
    pub next: Option<String>,
}

/// Simplified playlist object as it appears in listings.
#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

/// Request body for `POST /users/{user_id}/playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

/// Request body for replacing or appending playlist items.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistItemsRequest<'a> {
    pub uris: &'a [String],
}

/// Playlist version returned after a modification.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

/// Response of `GET /search` with `type=track`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub uri: String,
}

/// Error object Spotify returns with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}
