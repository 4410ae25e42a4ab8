//! Renders a track sequence as a printable PDF of cut-out cards.
//!
//! Each card is one page row: an info cell with artist, year and title next
//! to a QR code cell linking back to the track.

pub mod error;
pub mod layout;
pub mod pdf;
pub mod qr;

pub use error::RenderError;
pub use pdf::render;
