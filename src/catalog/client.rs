use std::fmt;

use anyhow::Context;
use log::info;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::catalog::error::{AuthError, FetchError};
use crate::catalog::wire::TrackListing;
use crate::config::SpotifyConfig;
use crate::domain::{PlaylistId, Track};

const TOKEN_PATH: &str = "/api/token";

/// Bearer token from the client-credentials exchange.
///
/// Lives for one batch of requests and is never persisted.
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: Option<String>,
    #[allow(dead_code)]
    expires_in: Option<u64>,
}

/// Blocking client for the catalog service.
///
/// Base URLs are threaded through the constructor so tests can point the
/// client at a local stub server.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    auth_base: String,
    api_base: String,
    credentials: SpotifyConfig,
}

impl CatalogClient {
    pub fn new(
        auth_base: impl Into<String>,
        api_base: impl Into<String>,
        credentials: SpotifyConfig,
    ) -> anyhow::Result<Self> {
        // No timeout: network calls may block until the transport gives up.
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            auth_base: auth_base.into(),
            api_base: api_base.into(),
            credentials,
        })
    }

    /// Exchanges the client credentials for a bearer token.
    ///
    /// Single attempt; anything but HTTP 200 with a well-formed token body
    /// is an [`AuthError`].
    pub fn authenticate(&self) -> Result<AccessToken, AuthError> {
        let response = self
            .http
            .post(format!("{}{}", self.auth_base, TOKEN_PATH))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(AuthError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body: AuthResponse = response.json().map_err(AuthError::MalformedBody)?;
        Ok(AccessToken(body.access_token))
    }

    /// Fetches the playlist's tracks and maps them into the internal model.
    ///
    /// Track order matches the upstream response; nothing is reordered or
    /// deduplicated. A single item without artists aborts the whole fetch.
    pub fn playlist_tracks(
        &self,
        token: &AccessToken,
        playlist: &PlaylistId,
    ) -> Result<Vec<Track>, FetchError> {
        let response = self
            .http
            .get(format!(
                "{}/v1/playlists/{}/tracks",
                self.api_base, playlist
            ))
            .bearer_auth(token.as_str())
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let listing: TrackListing = response.json().map_err(FetchError::MalformedBody)?;

        let tracks = listing
            .tracks
            .items
            .into_iter()
            .map(|item| item.into_track())
            .collect::<Result<Vec<_>, _>>()?;

        info!("fetched {} tracks from playlist {playlist}", tracks.len());
        Ok(tracks)
    }
}
