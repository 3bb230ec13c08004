use colored::Colorize;

use crate::{
    cli::{
        albums::print_albums, artists::print_artists, tracks::print_tracks, videos::print_videos,
        with_spinner,
    },
    error,
    tidal::Client,
    types::SearchParams,
    warning,
};

/// Runs a catalog search and prints one table per non-empty result kind.
pub fn search(client: &Client, params: &SearchParams) {
    let results = match with_spinner("Searching...", || client.search(params)) {
        Ok(results) => results,
        Err(e) => error!("{}", e),
    };

    let mut found = false;

    if !results.albums.is_empty() {
        println!("{}", "Albums".bold());
        print_albums(&results.albums);
        found = true;
    }
    if !results.artists.is_empty() {
        println!("{}", "Artists".bold());
        print_artists(&results.artists);
        found = true;
    }
    if !results.tracks.is_empty() {
        println!("{}", "Tracks".bold());
        print_tracks(&results.tracks);
        found = true;
    }
    if !results.videos.is_empty() {
        println!("{}", "Videos".bold());
        print_videos(&results.videos);
        found = true;
    }

    if !found {
        warning!("Nothing found for \"{}\"", params.query);
    }
}
