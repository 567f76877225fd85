use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

/// Length of the random OAuth `state` value.
pub const STATE_LENGTH: usize = 16;

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Value for an HTTP Basic `Authorization` header.
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Field-scoped catalog search query for one CSV row.
pub fn search_query(artist: &str, track: &str) -> String {
    format!("artist:{} track:{}", artist, track)
}
