use crate::{
    Res,
    spotify::SpotifyClient,
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, GetUserPlaylistsResponse, Page,
        PlaylistItemsRequest, PlaylistRef, PlaylistSummary, SnapshotResponse,
    },
};

/// Fetches one page of the current user's playlists.
///
/// Uses `GET /me/playlists` with `limit` and `offset`. `null` entries, which
/// the listing occasionally contains, are skipped but still counted in
/// `fetched`. The returned page reports whether Spotify advertised a
/// following page.
pub fn page(client: &SpotifyClient, offset: u32, limit: u32) -> Res<Page<PlaylistSummary>> {
    let url = client.url("/me/playlists");
    let limit = limit.to_string();
    let offset_param = offset.to_string();

    let res: GetUserPlaylistsResponse = client
        .send(|http| {
            http.get(&url)
                .query(&[("limit", limit.as_str()), ("offset", offset_param.as_str())])
        })?
        .json()?;

    let fetched = res.items.len() as u32;
    let items = res
        .items
        .into_iter()
        .flatten()
        .map(|p| PlaylistSummary {
            id: p.id,
            name: p.name,
            owner_id: p.owner.id,
        })
        .collect();

    Ok(Page {
        items,
        fetched,
        offset: res.offset,
        has_next: res.next.is_some(),
    })
}

/// Creates a playlist for `user_id` with an empty description.
pub fn create(client: &SpotifyClient, user_id: &str, name: &str, public: bool) -> Res<PlaylistRef> {
    let url = client.url(&format!("/users/{}/playlists", user_id));
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: String::new(),
        public,
        collaborative: false,
    };

    let res: CreatePlaylistResponse = client.send(|http| http.post(&url).json(&body))?.json()?;

    Ok(PlaylistRef {
        id: res.id,
        name: res.name,
    })
}

/// Replaces all items of a playlist. An empty `uris` slice clears it.
pub fn replace_items(client: &SpotifyClient, playlist_id: &str, uris: &[String]) -> Res<()> {
    let url = client.url(&format!("/playlists/{}/tracks", playlist_id));
    let body = PlaylistItemsRequest { uris };

    client.send(|http| http.put(&url).json(&body))?;
    Ok(())
}

/// Appends tracks to a playlist and returns the new snapshot id.
pub fn add_items(client: &SpotifyClient, playlist_id: &str, uris: &[String]) -> Res<String> {
    let url = client.url(&format!("/playlists/{}/tracks", playlist_id));
    let body = PlaylistItemsRequest { uris };

    let res: SnapshotResponse = client.send(|http| http.post(&url).json(&body))?.json()?;
    Ok(res.snapshot_id)
}
