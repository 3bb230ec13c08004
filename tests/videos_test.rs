mod common;

use common::{MockHttpClient, client, urls};

#[test]
fn test_get_single_video() {
    let (client, requests) = client(MockHttpClient::new().fixture(200, "single-video.json"));

    let video = client.get_single_video("288901234").expect("video should parse");

    assert_eq!(video.title, "Ella Baila Sola");
    assert_eq!(video.version, "Official Video");
    assert_eq!(video.images.len(), 2);
    assert_eq!(video.properties.video_type, "MUSIC_VIDEO");
    assert_eq!(video.album.title, "Ella Baila Sola");
    assert!(video.album.image_cover.is_empty());
    assert_eq!(video.artists[0].name, "Peso Pluma");
    assert_eq!(
        urls(&requests),
        vec!["https://openapi.tidal.com/videos/288901234?countryCode=AU"]
    );
}

#[test]
fn test_get_single_video_requires_id() {
    let (client, requests) = client(MockHttpClient::new().fixture(200, "single-video.json"));

    assert!(client.get_single_video("").unwrap_err().is_missing_parameter());
    assert!(requests.borrow().is_empty());
}

#[test]
fn test_get_multiple_videos() {
    let body = serde_json::json!({
        "data": [
            { "id": "288901234", "status": 200, "message": "success", "resource": { "id": "288901234", "title": "Ella Baila Sola" } },
            { "id": "1", "status": 404, "message": "Video not found" }
        ]
    });
    let (client, requests) = client(MockHttpClient::new().json(207, body));

    let videos = client
        .get_multiple_videos(&["288901234", "1"])
        .expect("videos should parse");

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "288901234");
    assert_eq!(
        urls(&requests),
        vec!["https://openapi.tidal.com/videos?countryCode=AU&ids=288901234%2C1"]
    );
}
