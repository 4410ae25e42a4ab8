use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::domain::PlaylistId;
use crate::sheet;

const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com";
const SPOTIFY_API_URL: &str = "https://api.spotify.com";

#[derive(Parser)]
#[command(name = "cardeck")]
#[command(version = "0.1")]
#[command(about = "Printable card sheets for Spotify playlists")]
#[command(
    after_help = "Example:\n  cardeck https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"
)]
pub struct Cli {
    /// Spotify playlist link, spotify:playlist: URI, or bare playlist id
    pub playlist: String,

    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Path of the rendered PDF
    #[arg(short, long, default_value = "output.pdf")]
    pub output: PathBuf,
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(err) = generate(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn generate(cli: &Cli) -> anyhow::Result<()> {
    // reject an unusable playlist reference before touching the network
    let playlist = PlaylistId::parse(&cli.playlist)?;
    let cfg = Config::load(&cli.config)?;

    let client = CatalogClient::new(SPOTIFY_AUTH_URL, SPOTIFY_API_URL, cfg.spotify)?;

    let token = client
        .authenticate()
        .context("could not authenticate to Spotify")?;
    let tracks = client
        .playlist_tracks(&token, &playlist)
        .context("could not get tracks from playlist")?;

    if tracks.is_empty() {
        warn!("playlist {playlist} has no tracks; the sheet will be empty");
    }

    sheet::render(&tracks, &cli.output).context("could not create PDF for tracks")?;

    info!(
        "wrote {} cards to {}",
        tracks.len(),
        cli.output.display()
    );
    Ok(())
}
