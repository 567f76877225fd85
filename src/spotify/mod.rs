//! # Spotify Integration Module
//!
//! This module is the integration layer between the importer and the Spotify
//! Web API. The workflow never talks HTTP directly; it calls into the
//! [`Catalog`] capability, which [`SpotifyClient`] implements with blocking
//! `reqwest` requests. Tests substitute an in-memory catalog.
//!
//! ## Architecture
//!
//! ```text
//! Workflow (resolve playlist, resolve tracks, import batches)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── playlist (list, create, replace, add)
//!     └── search (field-scoped track search)
//!          ↓
//! Spotify Web API
//! ```
//!
//! Authentication lives in [`auth`]: the authorization code flow that turns
//! an operator-pasted code into a bearer [`Token`](crate::types::Token).
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id
//! - `GET /me/playlists` - Current user's playlists, offset paginated
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `PUT /playlists/{playlist_id}/tracks` - Replace (clear) playlist items
//! - `POST /playlists/{playlist_id}/tracks` - Append up to 100 items
//! - `GET /search` - Track search
//! - `POST /api/token` - Authorization code exchange
//!
//! ## Transport
//!
//! Every call is synchronous. Rate limiting (429) and bad gateway (502)
//! responses are retried inside the client; any other failure surfaces as
//! [`Error::Api`](crate::error::Error::Api).

pub mod auth;
pub mod client;
pub mod playlist;
pub mod search;

pub use client::SpotifyClient;

use crate::{
    Res,
    types::{Page, PlaylistRef, PlaylistSummary, TrackMatch},
};

/// Maximum number of items a single append call accepts.
pub const MAX_ITEMS_PER_REQUEST: usize = 100;

/// Page size used when listing the current user's playlists.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Catalog operations the import workflow depends on.
pub trait Catalog {
    /// Id of the authenticated user.
    fn current_user_id(&self) -> Res<String>;

    /// One page of the authenticated user's playlists starting at `offset`.
    fn playlists_page(&self, offset: u32, limit: u32) -> Res<Page<PlaylistSummary>>;

    fn create_playlist(&self, user_id: &str, name: &str, public: bool) -> Res<PlaylistRef>;

    /// Replaces the playlist contents with `uris`; an empty slice clears it.
    fn replace_items(&self, playlist_id: &str, uris: &[String]) -> Res<()>;

    /// Appends `uris` (at most [`MAX_ITEMS_PER_REQUEST`]) and returns the new
    /// snapshot id.
    fn add_items(&self, playlist_id: &str, uris: &[String]) -> Res<String>;

    /// First track matching `artist` and `track`, if any.
    fn search_track(&self, artist: &str, track: &str) -> Res<TrackMatch>;
}
