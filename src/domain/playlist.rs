use std::fmt;
use thiserror::Error;

/// Validated Spotify playlist identifier.
///
/// One can get a playlist id from an `open.spotify.com` link, a
/// `spotify:playlist:` URI, or a bare id string; all three normalize to the
/// same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistId(String);

#[derive(Debug, Error)]
#[error("not a usable playlist reference: {0:?}")]
pub struct InvalidPlaylistRef(pub String);

impl PlaylistId {
    /// Normalizes a playlist reference to the bare id.
    ///
    /// Share links carry query noise (`?si=...`) which is dropped. Bare ids
    /// must be non-empty ASCII alphanumeric.
    pub fn parse(raw: &str) -> Result<Self, InvalidPlaylistRef> {
        let trimmed = raw.trim();
        // query parameters are never part of the id
        let without_query = trimmed.split('?').next().unwrap_or(trimmed);

        let candidate = if let Some(rest) = without_query.strip_prefix("spotify:playlist:") {
            rest
        } else if without_query.starts_with("https://open.spotify.com/")
            || without_query.starts_with("http://open.spotify.com/")
        {
            match without_query.split_once("/playlist/") {
                Some((_, rest)) => rest.split('/').next().unwrap_or(""),
                None => return Err(InvalidPlaylistRef(raw.to_string())),
            }
        } else {
            without_query
        };

        if !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(InvalidPlaylistRef(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
