use crate::{
    Res, info,
    spotify::{Catalog, PLAYLIST_PAGE_LIMIT},
    types::{PlaylistRef, PlaylistSummary},
};

/// Whether the import target already existed or was created by this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistOrigin {
    Existing,
    Created,
}

/// A playlist that is empty and ready to receive tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaylist {
    pub playlist: PlaylistRef,
    pub origin: PlaylistOrigin,
}

/// Lazy walk over the current user's playlists, one request per page.
///
/// Nothing is fetched until the first call to `next`, and iteration stops
/// after the last page or the first error. [`PlaylistPages::restart`]
/// rewinds to the first page.
pub struct PlaylistPages<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    limit: u32,
    next_offset: Option<u32>,
}

impl<'a, C: Catalog + ?Sized> PlaylistPages<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self::with_limit(catalog, PLAYLIST_PAGE_LIMIT)
    }

    pub fn with_limit(catalog: &'a C, limit: u32) -> Self {
        Self {
            catalog,
            limit: limit.max(1),
            next_offset: Some(0),
        }
    }

    pub fn restart(&mut self) {
        self.next_offset = Some(0);
    }
}

impl<C: Catalog + ?Sized> Iterator for PlaylistPages<'_, C> {
    type Item = Res<Vec<PlaylistSummary>>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next_offset.take()?;

        match self.catalog.playlists_page(offset, self.limit) {
            Ok(page) => {
                // A page may consist of null entries only, so progress is
                // judged on what the server sent rather than on `items`.
                if page.has_next && page.fetched > 0 {
                    self.next_offset = Some(page.offset + page.fetched);
                }
                Some(Ok(page.items))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Finds the first playlist owned by `user_id` whose name equals `name`.
///
/// The comparison is exact and case-sensitive. Pages are requested only
/// until a match turns up.
pub fn find_playlist<C: Catalog + ?Sized>(
    catalog: &C,
    user_id: &str,
    name: &str,
) -> Res<Option<PlaylistSummary>> {
    for page in PlaylistPages::new(catalog) {
        if let Some(found) = page?
            .into_iter()
            .find(|p| p.owner_id == user_id && p.name == name)
        {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Returns an empty playlist called `name`, reusing an existing one.
///
/// An existing playlist is cleared before it is returned so a rerun never
/// keeps stale tracks. Otherwise a new public playlist is created. Every
/// failure is returned to the caller.
pub fn resolve_playlist<C: Catalog + ?Sized>(catalog: &C, name: &str) -> Res<ResolvedPlaylist> {
    let user_id = catalog.current_user_id()?;

    match find_playlist(catalog, &user_id, name)? {
        Some(existing) => {
            info!("Found existing playlist: {}", name);
            catalog.replace_items(&existing.id, &[])?;
            info!("Cleared existing tracks from playlist");

            Ok(ResolvedPlaylist {
                playlist: existing.into(),
                origin: PlaylistOrigin::Existing,
            })
        }
        None => {
            info!("Creating new playlist: {}", name);
            let playlist = catalog.create_playlist(&user_id, name, true)?;

            Ok(ResolvedPlaylist {
                playlist,
                origin: PlaylistOrigin::Created,
            })
        }
    }
}
