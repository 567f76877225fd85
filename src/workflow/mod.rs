//! # Import Workflow
//!
//! The import runs as a strict sequence of stages on a single thread:
//!
//! ```text
//! Unauthenticated → Authenticated → PlaylistResolved → TracksResolved → Imported | PartiallyImported
//! ```
//!
//! Authentication happens before [`run`] is called; `run` receives a ready
//! [`Catalog`] and drives the remaining stages:
//!
//! 1. [`playlist::resolve_playlist`] - find the user's playlist by exact
//!    name (clearing it) or create it
//! 2. [`tracks::resolve_tracks`] - one search per CSV row, misses reported
//! 3. [`batch::import_batches`] - append the matches 100 at a time,
//!    continuing past failed batches
//!
//! Nothing is kept between runs.

pub mod batch;
pub mod playlist;
pub mod tracks;

pub use batch::{BatchOutcome, import_batches};
pub use playlist::{PlaylistOrigin, PlaylistPages, ResolvedPlaylist, find_playlist, resolve_playlist};
pub use tracks::{TrackResolution, resolve_track, resolve_tracks};

use crate::{Res, spotify::Catalog, success, types::CsvRow};

/// Terminal state of a run that got past playlist resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
    PartiallyImported,
}

/// Everything a finished run did.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub playlist: ResolvedPlaylist,
    pub resolved: Vec<String>,
    pub misses: Vec<CsvRow>,
    pub batches: Vec<BatchOutcome>,
}

impl ImportReport {
    pub fn status(&self) -> ImportStatus {
        if self.batches.iter().all(BatchOutcome::is_added) {
            ImportStatus::Imported
        } else {
            ImportStatus::PartiallyImported
        }
    }

    /// Number of tracks in batches the catalog accepted.
    pub fn added(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.is_added())
            .map(BatchOutcome::count)
            .sum()
    }
}

/// Fills the playlist called `playlist_name` with the search matches of `rows`.
///
/// Playlist and search failures abort the run; batch failures only show up
/// in the returned report.
pub fn run<C: Catalog + ?Sized>(
    catalog: &C,
    playlist_name: &str,
    rows: &[CsvRow],
) -> Res<ImportReport> {
    let playlist = resolve_playlist(catalog, playlist_name)?;
    let TrackResolution { resolved, misses } = resolve_tracks(catalog, rows)?;
    let batches = import_batches(catalog, &playlist.playlist, &resolved);

    if !resolved.is_empty() {
        success!("Finished adding tracks to the playlist!");
    }

    Ok(ImportReport {
        playlist,
        resolved,
        misses,
        batches,
    })
}
