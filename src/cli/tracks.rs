use tabled::Table;

use crate::{cli::track_row, error, tidal::Client, types::{PaginationParams, Track}, warning};

pub fn get_track(client: &Client, id: &str) {
    match client.get_single_track(id) {
        Ok(track) => print_tracks(&[track]),
        Err(e) => error!("{}", e),
    }
}

pub fn tracks_by_isrc(client: &Client, isrc: &str, params: PaginationParams) {
    match client.get_tracks_by_isrc(isrc, params) {
        Ok(tracks) if tracks.is_empty() => warning!("No tracks found for ISRC {}", isrc),
        Ok(tracks) => print_tracks(&tracks),
        Err(e) => error!("{}", e),
    }
}

pub fn multiple_tracks(client: &Client, ids: &[String]) {
    match client.get_multiple_tracks(ids) {
        Ok(tracks) => print_tracks(&tracks),
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn print_tracks(tracks: &[Track]) {
    let rows = tracks.iter().map(track_row).collect::<Vec<_>>();
    println!("{}", Table::new(rows));
}
