use tabled::Table;

use crate::{
    cli::{albums::print_albums, artist_row, with_spinner},
    error, info,
    tidal::Client,
    types::{Artist, PaginationParams},
    warning,
};

pub fn get_artist(client: &Client, id: &str) {
    match client.get_single_artist(id) {
        Ok(artist) => {
            print_artists(&[artist.clone()]);
            info!("{} pictures", artist.picture.len());
        }
        Err(e) => error!("{}", e),
    }
}

/// Lists the albums of an artist, either one page or the whole discography.
pub fn artist_albums(client: &Client, id: &str, params: PaginationParams, all: bool) {
    let result = if all {
        with_spinner("Fetching discography...", || {
            client.get_all_albums_by_artist(id)
        })
    } else {
        client.get_albums_by_artist(id, params)
    };

    match result {
        Ok(albums) if albums.is_empty() => warning!("No albums found for artist {}", id),
        Ok(albums) => {
            print_albums(&albums);
            info!("{} albums", albums.len());
        }
        Err(e) => error!("{}", e),
    }
}

pub fn multiple_artists(client: &Client, ids: &[String]) {
    match client.get_multiple_artists(ids) {
        Ok(artists) => print_artists(&artists),
        Err(e) => error!("{}", e),
    }
}

pub fn similar_artists(client: &Client, id: &str, limit: u32) {
    let ids = match client.get_similar_artists(id, PaginationParams { offset: 0, limit }) {
        Ok(ids) => ids,
        Err(e) => error!("{}", e),
    };

    if ids.is_empty() {
        warning!("No similar artists found for {}", id);
        return;
    }

    match client.get_multiple_artists(&ids) {
        Ok(artists) => print_artists(&artists),
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn print_artists(artists: &[Artist]) {
    let rows = artists.iter().map(artist_row).collect::<Vec<_>>();
    println!("{}", Table::new(rows));
}
