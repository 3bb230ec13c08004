use tabled::Table;

use crate::{
    cli::{album_row, track_row, with_spinner},
    error, info,
    tidal::Client,
    types::{Album, PaginationParams},
    warning,
};

pub fn get_album(client: &Client, id: &str) {
    match client.get_single_album(id) {
        Ok(album) => {
            print_albums(&[album.clone()]);
            info!("Copyright: {}", album.copyright);
            info!("Tags: {}", album.media_metadata.tags.join(", "));
            info!("{}", album.tidal_url);
        }
        Err(e) => error!("{}", e),
    }
}

pub fn albums_by_barcode(client: &Client, barcode_id: &str) {
    match client.get_album_by_barcode_id(barcode_id) {
        Ok(albums) if albums.is_empty() => warning!("No albums found for barcode {}", barcode_id),
        Ok(albums) => print_albums(&albums),
        Err(e) => error!("{}", e),
    }
}

pub fn multiple_albums(client: &Client, ids: &[String]) {
    match client.get_multiple_albums(ids) {
        Ok(albums) => {
            if albums.len() < ids.len() {
                warning!(
                    "{} of {} requested IDs could not be resolved",
                    ids.len() - albums.len(),
                    ids.len()
                );
            }
            print_albums(&albums);
        }
        Err(e) => error!("{}", e),
    }
}

pub fn album_tracks(client: &Client, id: &str) {
    let tracks = match with_spinner("Fetching album items...", || client.get_album_tracks(id)) {
        Ok(tracks) => tracks,
        Err(e) => error!("{}", e),
    };

    if tracks.is_empty() {
        warning!("Album {} has no items", id);
        return;
    }

    let rows = tracks.iter().map(track_row).collect::<Vec<_>>();
    println!("{}", Table::new(rows));
    info!("{} items", tracks.len());
}

/// Lists albums similar to `id`, resolving the returned IDs to full albums.
pub fn similar_albums(client: &Client, id: &str, limit: u32) {
    let ids = match client.get_similar_albums(id, PaginationParams { offset: 0, limit }) {
        Ok(ids) => ids,
        Err(e) => error!("{}", e),
    };

    if ids.is_empty() {
        warning!("No similar albums found for {}", id);
        return;
    }

    match client.get_multiple_albums(&ids) {
        Ok(albums) => print_albums(&albums),
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn print_albums(albums: &[Album]) {
    let rows = albums.iter().map(album_row).collect::<Vec<_>>();
    println!("{}", Table::new(rows));
}
