//! # CLI Module
//!
//! This module implements the commands of the `tidalcat` binary. Each command
//! calls one operation of [`crate::tidal::Client`] and renders the result as a
//! table, so every endpoint of the library can be tried from a shell.
//!
//! ## Command Categories
//!
//! - [`token`] - Prints the bearer token of the client-credentials exchange
//! - [`albums`] - Single album, barcode lookup, multiple albums, album items,
//!   similar albums
//! - [`artists`] - Single artist, an artist's albums, multiple artists,
//!   similar artists
//! - [`tracks`] - Single track, ISRC lookup, multiple tracks
//! - [`videos`] - Single video, multiple videos
//! - [`search`] - Catalog search across all resource kinds
//!
//! ## Error Handling
//!
//! Commands are terminal: a failed API call is reported with the `error!`
//! macro, which prints the error chain and exits with status 1. Empty results
//! are reported with `warning!`.
//!
//! ## Usage
//!
//! ```bash
//! tidalcat token
//! tidalcat albums get 51584178
//! tidalcat albums tracks 37267701
//! tidalcat artists similar 5907 --limit 10
//! tidalcat search "Peso Pluma" --country MX --popularity country --limit 5
//! ```

pub mod albums;
pub mod artists;
pub mod search;
pub mod token;
pub mod tracks;
pub mod videos;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    tidal::Client,
    types::{
        Album, AlbumTableRow, Artist, ArtistTableRow, Track, TrackTableRow, Video, VideoTableRow,
    },
};

/// Authenticates with the credentials from the environment.
///
/// `country` overrides `TIDAL_COUNTRY_CODE`. Missing credentials or a failed
/// token exchange terminate the program.
pub fn connect(country: Option<String>) -> Client {
    let client_id = match config::tidal_client_id() {
        Ok(id) => id,
        Err(e) => error!("Cannot load credentials. Err: {}", e),
    };
    let client_secret = match config::tidal_client_secret() {
        Ok(secret) => secret,
        Err(e) => error!("Cannot load credentials. Err: {}", e),
    };
    let country_code = country.unwrap_or_else(config::tidal_country_code);

    match with_spinner("Requesting access token...", || {
        Client::new(&client_id, &client_secret, &country_code)
    }) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    }
}

/// Runs `f` while a spinner with `message` is displayed.
pub(crate) fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = f();
    pb.finish_and_clear();
    result
}

fn artist_names(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn album_row(album: &Album) -> AlbumTableRow {
    AlbumTableRow {
        id: album.id.clone(),
        title: album.title.clone(),
        artists: artist_names(&album.artists),
        released: album.release_date.clone(),
        tracks: album.number_of_tracks,
    }
}

pub(crate) fn artist_row(artist: &Artist) -> ArtistTableRow {
    ArtistTableRow {
        id: artist.id.clone(),
        name: artist.name.clone(),
        url: artist.tidal_url.clone(),
    }
}

pub(crate) fn track_row(track: &Track) -> TrackTableRow {
    TrackTableRow {
        id: track.id.clone(),
        position: format!("{}.{}", track.volume_number, track.track_number),
        title: if track.version.is_empty() {
            track.title.clone()
        } else {
            format!("{} ({})", track.title, track.version)
        },
        artists: artist_names(&track.artists),
        album: track.album.title.clone(),
    }
}

pub(crate) fn video_row(video: &Video) -> VideoTableRow {
    VideoTableRow {
        id: video.id.clone(),
        title: video.title.clone(),
        artists: artist_names(&video.artists),
        released: video.release_date.clone(),
    }
}
