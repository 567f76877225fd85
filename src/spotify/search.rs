use crate::{
    Res,
    spotify::SpotifyClient,
    types::{SearchResponse, TrackMatch},
    utils,
};

/// Searches the catalog for `artist` and `track` and returns the URI of the
/// first hit.
///
/// The query is scoped to the `artist:` and `track:` fields and asks for a
/// single result. An empty result set yields `Ok(None)`; transport and API
/// errors are returned as-is.
pub fn first_track_uri(client: &SpotifyClient, artist: &str, track: &str) -> Res<TrackMatch> {
    let url = client.url("/search");
    let query = utils::search_query(artist, track);

    let res: SearchResponse = client
        .send(|http| {
            http.get(&url)
                .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        })?
        .json()?;

    Ok(res
        .tracks
        .and_then(|page| page.items.into_iter().flatten().next())
        .map(|t| t.uri))
}
