//! Client for the Spotify Web API: token exchange plus playlist track
//! listings, mapped into the internal [`crate::domain::Track`] model.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{AccessToken, CatalogClient};
pub use error::{AuthError, DataError, FetchError};
