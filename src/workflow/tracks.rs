use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    spotify::Catalog,
    types::{CsvRow, TrackMatch},
    warning,
};

/// Outcome of searching every CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackResolution {
    /// Track URIs in input order.
    pub resolved: Vec<String>,
    /// Rows without a search hit, in input order.
    pub misses: Vec<CsvRow>,
}

pub fn resolve_track<C: Catalog + ?Sized>(catalog: &C, row: &CsvRow) -> Res<TrackMatch> {
    catalog.search_track(&row.artist, &row.track)
}

/// Searches the catalog once per row.
///
/// A row without a hit is reported with one `Track not found` line and left
/// out of the result. A failed search aborts the whole resolution.
pub fn resolve_tracks<C: Catalog + ?Sized>(catalog: &C, rows: &[CsvRow]) -> Res<TrackResolution> {
    let pb = ProgressBar::new(rows.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} [{pos}/{len}]") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message("Searching tracks...");

    let mut resolution = TrackResolution::default();

    for row in rows {
        let found = match resolve_track(catalog, row) {
            Ok(found) => found,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        match found {
            Some(uri) => resolution.resolved.push(uri),
            None => {
                pb.suspend(|| warning!("Track not found: {} - {}", row.artist, row.track));
                resolution.misses.push(row.clone());
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(resolution)
}
