use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("token endpoint returned status {0}")]
    Status(u16),

    #[error("malformed token response: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("track listing request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("track listing returned status {0}")]
    Status(u16),

    #[error("malformed track listing: {0}")]
    MalformedBody(#[source] reqwest::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// A track item that cannot be mapped into the internal model.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("track {name:?} has no credited artists")]
    MissingArtist { name: String },
}
