/// Represents one playlist entry, reduced to what a printed card shows.
///
/// Upstream wire fields never leak past this type; the renderer only ever
/// sees these four strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Display name of the first credited artist.
    pub artist: String,
    /// Track title.
    pub name: String,
    /// Canonical link for the track, encoded into the card's QR code.
    pub url: String,
    /// Four ASCII digits, or empty when the upstream release date was
    /// unusable.
    pub release_year: String,
}
