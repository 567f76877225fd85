#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use playlist_importer::{
    Error, Res,
    spotify::Catalog,
    types::{CsvRow, Page, PlaylistRef, PlaylistSummary, TrackMatch},
};

pub const USER_ID: &str = "listener";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    PlaylistsPage { offset: u32, limit: u32 },
    Create { user_id: String, name: String, public: bool },
    Replace { playlist_id: String, uris: Vec<String> },
    Add { playlist_id: String, uris: Vec<String> },
    Search { artist: String, track: String },
}

/// In-memory catalog that records every call made against it.
#[derive(Default)]
pub struct FakeCatalog {
    pub playlists: Vec<PlaylistSummary>,
    pub tracks: HashMap<(String, String), String>,
    /// 1-based numbers of `add_items` calls that fail.
    pub failing_adds: HashSet<usize>,
    pub failing_search: Option<(String, String)>,
    pub failing_listing: bool,
    /// Listing positions the server reports as `null`.
    pub null_entries: HashSet<usize>,
    calls: RefCell<Vec<Call>>,
    adds: Cell<usize>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist(mut self, id: &str, name: &str, owner_id: &str) -> Self {
        self.playlists.push(PlaylistSummary {
            id: id.to_string(),
            name: name.to_string(),
            owner_id: owner_id.to_string(),
        });
        self
    }

    pub fn with_other_playlists(mut self, count: usize) -> Self {
        for i in 0..count {
            self.playlists.push(PlaylistSummary {
                id: format!("other-{}", i),
                name: format!("Mix {}", i),
                owner_id: USER_ID.to_string(),
            });
        }
        self
    }

    /// Appends `count` listing entries that come back as `null`.
    pub fn with_null_entries(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.null_entries.insert(self.playlists.len());
            self.playlists.push(PlaylistSummary {
                id: String::new(),
                name: String::new(),
                owner_id: String::new(),
            });
        }
        self
    }

    pub fn with_track(mut self, artist: &str, track: &str, uri: &str) -> Self {
        self.tracks
            .insert((artist.to_string(), track.to_string()), uri.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn add_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Add { uris, .. } => Some(uris),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn api_error(message: &str) -> Error {
    Error::Api {
        status: 500,
        message: message.to_string(),
    }
}

impl Catalog for FakeCatalog {
    fn current_user_id(&self) -> Res<String> {
        self.record(Call::CurrentUser);
        Ok(USER_ID.to_string())
    }

    fn playlists_page(&self, offset: u32, limit: u32) -> Res<Page<PlaylistSummary>> {
        self.record(Call::PlaylistsPage { offset, limit });
        if self.failing_listing {
            return Err(api_error("listing unavailable"));
        }

        let start = (offset as usize).min(self.playlists.len());
        let end = (start + limit as usize).min(self.playlists.len());
        let items = (start..end)
            .filter(|i| !self.null_entries.contains(i))
            .map(|i| self.playlists[i].clone())
            .collect();
        Ok(Page {
            items,
            fetched: (end - start) as u32,
            offset,
            has_next: end < self.playlists.len(),
        })
    }

    fn create_playlist(&self, user_id: &str, name: &str, public: bool) -> Res<PlaylistRef> {
        self.record(Call::Create {
            user_id: user_id.to_string(),
            name: name.to_string(),
            public,
        });
        Ok(PlaylistRef {
            id: "created".to_string(),
            name: name.to_string(),
        })
    }

    fn replace_items(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        self.record(Call::Replace {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        });
        Ok(())
    }

    fn add_items(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        self.record(Call::Add {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        });
        let n = self.adds.get() + 1;
        self.adds.set(n);

        if self.failing_adds.contains(&n) {
            return Err(api_error("Invalid base62 id"));
        }
        Ok(format!("snapshot-{}", n))
    }

    fn search_track(&self, artist: &str, track: &str) -> Res<TrackMatch> {
        self.record(Call::Search {
            artist: artist.to_string(),
            track: track.to_string(),
        });

        if self.failing_search.as_ref() == Some(&(artist.to_string(), track.to_string())) {
            return Err(api_error("search unavailable"));
        }
        Ok(self
            .tracks
            .get(&(artist.to_string(), track.to_string()))
            .cloned())
    }
}

/// `count` rows that all resolve, plus the catalog that resolves them.
pub fn resolvable_rows(catalog: FakeCatalog, count: usize) -> (FakeCatalog, Vec<CsvRow>) {
    let mut catalog = catalog;
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let row = CsvRow::new(format!("Artist {}", i), format!("Track {}", i));
        catalog = catalog.with_track(&row.artist, &row.track, &track_uri(i));
        rows.push(row);
    }
    (catalog, rows)
}

pub fn track_uri(i: usize) -> String {
    format!("spotify:track:{:022}", i)
}
