//! Serde view of the playlist-tracks response.
//!
//! The upstream schema is deeply nested and mostly irrelevant; only the
//! fields a card needs are modeled and everything else is ignored during
//! deserialization.

use log::warn;
use serde::Deserialize;

use crate::catalog::error::DataError;
use crate::domain::Track;

#[derive(Debug, Deserialize)]
pub struct TrackListing {
    pub tracks: TrackItems,
}

#[derive(Debug, Deserialize)]
pub struct TrackItems {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: TrackInfo,
}

#[derive(Debug, Deserialize)]
pub struct TrackInfo {
    pub album: AlbumInfo,
    pub artists: Vec<Artist>,
    pub external_urls: ExternalUrls,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AlbumInfo {
    pub release_date: String,
}

#[derive(Debug, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

impl PlaylistItem {
    /// Maps one upstream item to the internal model.
    ///
    /// Only the first credited artist is kept; an item with no artists at
    /// all is a [`DataError`] and aborts the whole fetch.
    pub fn into_track(self) -> Result<Track, DataError> {
        let info = self.track;
        let artist = info
            .artists
            .into_iter()
            .next()
            .ok_or_else(|| DataError::MissingArtist {
                name: info.name.clone(),
            })?;

        Ok(Track {
            artist: artist.name,
            name: info.name,
            url: info.external_urls.spotify,
            release_year: release_year(&info.album.release_date),
        })
    }
}

/// Derives a four-digit release year from an upstream release date.
///
/// Spotify reports dates at varying precision (`YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`). Anything that does not yield four ASCII digits is logged
/// and produces an empty year; the card is still printed.
pub fn release_year(release_date: &str) -> String {
    let candidate = match release_date.split_once('-') {
        Some((year, _)) => year,
        None => release_date,
    };

    if candidate.len() == 4 && candidate.bytes().all(|b| b.is_ascii_digit()) {
        candidate.to_string()
    } else {
        warn!("could not derive release year from {release_date:?}");
        String::new()
    }
}
