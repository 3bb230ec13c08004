mod common;

use common::{MockHttpClient, client, urls};
use reqwest::{
    Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use tidalcat::{
    Client, TidalError,
    config::{ClientConfig, TIDAL_CONTENT_TYPE},
    tidal::auth::basic_auth,
    types::{PaginationParams, SearchParams},
};

#[test]
fn test_basic_auth() {
    // base64("id:secret")
    assert_eq!(basic_auth("id", "secret"), "Basic aWQ6c2VjcmV0");
}

#[test]
fn test_build_authenticates_with_client_credentials() {
    let mock = MockHttpClient::new().fixture(200, "token.json");
    let requests = mock.requests();

    let client = Client::builder()
        .country_code("AU")
        .http_client(mock)
        .build("id", "secret")
        .expect("client should authenticate");

    assert_eq!(client.token(), "eyJraWQiOiJ2OU1GbFhqWSIsImFsZyI6IkVTMjU2In0.test");
    assert_eq!(client.country_code(), "AU");

    let requests = requests.borrow();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "https://auth.tidal.com/v1/oauth2/token");
    assert_eq!(request.header(&AUTHORIZATION), Some("Basic aWQ6c2VjcmV0"));
    assert_eq!(
        request.header(&CONTENT_TYPE),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.body.as_deref(), Some("grant_type=client_credentials"));
}

#[test]
fn test_build_uses_configured_oauth_url() {
    let mock = MockHttpClient::new().fixture(200, "token.json");
    let requests = mock.requests();

    Client::builder()
        .oauth_url("http://localhost:9000/token")
        .http_client(mock)
        .build("id", "secret")
        .expect("client should authenticate");

    assert_eq!(urls(&requests), vec!["http://localhost:9000/token"]);
}

#[test]
fn test_build_fails_on_rejected_credentials() {
    let mock = MockHttpClient::new().reply(401, r#"{"error":"invalid_client"}"#);

    let err = Client::builder()
        .http_client(mock)
        .build("id", "wrong")
        .err()
        .expect("authentication should fail");

    assert!(matches!(err, TidalError::Authentication(_)));
    assert_eq!(err.status_code(), Some(401));
}

#[test]
fn test_build_fails_on_malformed_token_response() {
    let mock = MockHttpClient::new().reply(200, "not json");

    let err = Client::builder()
        .http_client(mock)
        .build("id", "secret")
        .err()
        .expect("authentication should fail");

    match err {
        TidalError::Authentication(source) => {
            assert!(matches!(*source, TidalError::Decode { .. }))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_build_fails_on_transport_error() {
    let mock = MockHttpClient::new().fail("connection refused");

    let err = Client::builder()
        .http_client(mock)
        .build("id", "secret")
        .err()
        .expect("authentication should fail");

    assert!(matches!(err, TidalError::Authentication(_)));
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_request_sets_headers_and_query() {
    let (client, requests) = client(MockHttpClient::new().reply(200, "{}"));

    let body = client
        .request(
            Method::GET,
            "/albums/51584178/similar",
            Some(&PaginationParams {
                offset: 0,
                limit: 10,
            }),
        )
        .expect("request should succeed");
    assert_eq!(body, b"{}");

    let requests = requests.borrow();
    let request = &requests[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url,
        "https://openapi.tidal.com/albums/51584178/similar?countryCode=AU&limit=10"
    );
    assert_eq!(request.header(&AUTHORIZATION), Some("Bearer test-token"));
    assert_eq!(request.header(&CONTENT_TYPE), Some(TIDAL_CONTENT_TYPE));
    assert_eq!(request.header(&ACCEPT), Some(TIDAL_CONTENT_TYPE));
    assert!(request.body.is_none());
}

#[test]
fn test_request_uses_configured_api_url() {
    let mock = MockHttpClient::new().reply(200, "{}");
    let requests = mock.requests();
    let client = Client::builder()
        .config(ClientConfig {
            api_url: "http://localhost:8080".to_string(),
            ..ClientConfig::default()
        })
        .country_code("SE")
        .http_client(mock)
        .build_with_token("token");

    client
        .request(Method::GET, "/artists/5907", None)
        .expect("request should succeed");

    assert_eq!(
        urls(&requests),
        vec!["http://localhost:8080/artists/5907?countryCode=SE"]
    );
}

#[test]
fn test_request_accepts_multi_status() {
    let (client, _) = client(MockHttpClient::new().reply(207, "{\"data\":[]}"));

    let body = client.request(Method::GET, "/albums/byIds", None);

    assert!(body.is_ok());
}

#[test]
fn test_request_rejects_other_success_codes() {
    let (client, _) = client(MockHttpClient::new().reply(204, ""));

    let err = client
        .request(Method::GET, "/albums/1", None)
        .expect_err("204 is not accepted");

    assert!(matches!(err, TidalError::UnexpectedStatus(204)));
}

#[test]
fn test_transport_error_names_the_endpoint() {
    let (client, _) = client(MockHttpClient::new().fail("connection reset"));

    let err = client
        .get_single_album("51584178")
        .expect_err("transport failure should surface");

    let message = err.to_string();
    assert!(message.contains("single album"));
    assert!(message.contains("connection reset"));
    assert!(message.contains("https://openapi.tidal.com/albums/51584178"));
    assert_eq!(err.status_code(), None);
}

#[test]
fn test_decode_error_names_the_endpoint() {
    let (client, _) = client(MockHttpClient::new().reply(200, "{\"resource\": 42}"));

    let err = client
        .get_single_artist("5907")
        .expect_err("invalid body should not decode");

    match err {
        TidalError::Decode { endpoint, .. } => assert_eq!(endpoint, "single artist"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_server_error_fails_every_operation() {
    let (client, requests) = client(MockHttpClient::new().reply(500, "Internal Server Error"));
    let page = PaginationParams {
        offset: 0,
        limit: 10,
    };
    let search = SearchParams {
        query: "Devo".to_string(),
        ..SearchParams::default()
    };

    let results: Vec<(&str, Result<(), TidalError>)> = vec![
        ("single album", client.get_single_album("1").map(|_| ())),
        ("album by barcode", client.get_album_by_barcode_id("1").map(|_| ())),
        ("multiple albums", client.get_multiple_albums(&["1"]).map(|_| ())),
        ("album items", client.get_album_tracks("1").map(|_| ())),
        ("similar albums", client.get_similar_albums("1", page).map(|_| ())),
        ("single artist", client.get_single_artist("1").map(|_| ())),
        ("albums by artist", client.get_albums_by_artist("1", page).map(|_| ())),
        ("all albums by artist", client.get_all_albums_by_artist("1").map(|_| ())),
        ("multiple artists", client.get_multiple_artists(&["1"]).map(|_| ())),
        ("similar artists", client.get_similar_artists("1", page).map(|_| ())),
        ("single track", client.get_single_track("1").map(|_| ())),
        ("tracks by ISRC", client.get_tracks_by_isrc("1", page).map(|_| ())),
        ("multiple tracks", client.get_multiple_tracks(&["1"]).map(|_| ())),
        ("single video", client.get_single_video("1").map(|_| ())),
        ("multiple videos", client.get_multiple_videos(&["1"]).map(|_| ())),
        ("search", client.search(&search).map(|_| ())),
    ];

    for (operation, result) in &results {
        match result {
            Ok(()) => panic!("{} should fail", operation),
            Err(err) => {
                assert_eq!(err.status_code(), Some(500), "{}", operation);
                assert!(matches!(err, TidalError::Endpoint { .. }), "{}", operation);
            }
        }
    }

    // one request per operation, paginated listings stop at the first failure
    assert_eq!(requests.borrow().len(), results.len());
}
