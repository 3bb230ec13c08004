use tabled::Table;

use crate::{cli::video_row, error, tidal::Client, types::Video};

pub fn get_video(client: &Client, id: &str) {
    match client.get_single_video(id) {
        Ok(video) => print_videos(&[video]),
        Err(e) => error!("{}", e),
    }
}

pub fn multiple_videos(client: &Client, ids: &[String]) {
    match client.get_multiple_videos(ids) {
        Ok(videos) => print_videos(&videos),
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn print_videos(videos: &[Video]) {
    let rows = videos.iter().map(video_row).collect::<Vec<_>>();
    println!("{}", Table::new(rows));
}
