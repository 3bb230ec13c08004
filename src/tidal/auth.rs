use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    config::ClientConfig,
    error::{Result, TidalError},
    tidal::transport::{HttpClient, HttpRequest, process_request},
    types::AuthResponse,
};

/// Exchanges client credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against the configured
/// token URL. The client ID and secret are sent as an HTTP Basic
/// `Authorization` header and the form body is
/// `grant_type=client_credentials`.
///
/// # Arguments
///
/// * `http` - Transport used for the single token request
/// * `config` - API coordinates holding the token URL
/// * `client_id` - Client ID registered on the TIDAL developer portal
/// * `client_secret` - Matching client secret
///
/// # Returns
///
/// Returns the `access_token` of the response. Token type and expiry are
/// ignored; the token is never refreshed.
///
/// # Errors
///
/// Every failure (network error, status other than 200/207, malformed
/// body) is reported as [`TidalError::Authentication`] wrapping the cause.
pub fn get_access_token(
    http: &dyn HttpClient,
    config: &ClientConfig,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    request_token(http, config, client_id, client_secret)
        .map_err(|e| TidalError::Authentication(Box::new(e)))
}

fn request_token(
    http: &dyn HttpClient,
    config: &ClientConfig,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    let request = HttpRequest {
        method: Method::POST,
        url: config.oauth_url.clone(),
        headers: vec![
            (
                CONTENT_TYPE,
                "application/x-www-form-urlencoded".to_string(),
            ),
            (AUTHORIZATION, basic_auth(client_id, client_secret)),
        ],
        body: Some("grant_type=client_credentials".to_string()),
    };

    let body = process_request(http, request)?;
    let response: AuthResponse =
        serde_json::from_slice(&body).map_err(|source| TidalError::Decode {
            endpoint: "OAuth token",
            source,
        })?;

    Ok(response.access_token)
}

/// Builds the `Authorization` header value for HTTP Basic authentication.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", credentials)
}
