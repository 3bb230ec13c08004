//! # TIDAL Integration Module
//!
//! This module is the client for the TIDAL catalog API. It authenticates with
//! the OAuth 2.0 client-credentials grant, sends authenticated requests to
//! the catalog endpoints and decodes the JSON responses into the types of
//! [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, applications)
//!          ↓
//! Client operations
//!     ├── Albums (single, barcode, multiple, items, similar)
//!     ├── Artists (single, albums, multiple, similar)
//!     ├── Tracks (single, ISRC, multiple)
//!     ├── Videos (single, multiple)
//!     └── Search
//!          ↓
//! Parameter encoding (utils) + Transport (HttpClient)
//!          ↓
//! TIDAL API
//! ```
//!
//! ## Request Shapes
//!
//! Every operation follows one of four shapes:
//! - **Single by ID**: rejects an empty ID, fetches one `{"resource": ...}`
//!   document and returns the entity.
//! - **Filter**: sends a barcode, ISRC or ID list filter and returns the
//!   resources of the `{"data": [...]}` envelope.
//! - **Paginated accumulation**: walks an endpoint 100 items at a time and
//!   concatenates the pages in server order.
//! - **ID projection**: lists the IDs of similar albums or artists, ready to
//!   be passed to the multi-fetch operations.
//!
//! ## Error Handling
//!
//! Nothing is retried, logged or swallowed. Missing arguments fail before any
//! request is made; every other failure is wrapped with the name of the
//! endpoint and returned. See [`crate::error::TidalError`].
//!
//! ## Thread Safety
//!
//! Calls are blocking and sequential. A [`Client`] can be reused for any
//! number of calls but is not meant to be shared between threads.
//!
//! ## Usage
//!
//! ```rust
//! let client = Client::new(&client_id, &client_secret, "AU")?;
//!
//! let album = client.get_single_album("51584178")?;
//! let tracks = client.get_album_tracks(&album.id)?;
//!
//! let similar = client.get_similar_albums(&album.id, PaginationParams { offset: 0, limit: 10 })?;
//! let albums = client.get_multiple_albums(&similar)?;
//! ```

pub mod albums;
pub mod artists;
pub mod auth;
pub mod search;
pub mod tracks;
pub mod transport;
pub mod videos;

use reqwest::{
    Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;

pub use transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

use crate::{
    config::ClientConfig,
    error::{Result, TidalError},
    types::{Envelope, PaginationParams, Resource},
    utils::{QueryParams, encode_params},
};

/// Number of items requested per page when accumulating a listing.
pub const PAGE_LIMIT: u32 = 100;

/// Authenticated client for the TIDAL catalog API.
///
/// A client only exists with a bearer token: [`Client::new`] and
/// [`ClientBuilder::build`] authenticate before returning and fail as a
/// whole if the token exchange fails.
pub struct Client {
    config: ClientConfig,
    country_code: String,
    token: String,
    http: Box<dyn HttpClient>,
}

impl Client {
    /// Authenticates against the production API and returns a client.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Client ID registered on the TIDAL developer portal
    /// * `client_secret` - Matching client secret
    /// * `country_code` - ISO 3166-1 alpha-2 code sent with every request
    ///
    /// # Errors
    ///
    /// Returns [`TidalError::Authentication`] when the token exchange fails.
    ///
    /// # Example
    ///
    /// ```
    /// let client = Client::new("client-id", "client-secret", "AU")?;
    /// println!("{}", client.token());
    /// ```
    pub fn new(client_id: &str, client_secret: &str, country_code: &str) -> Result<Self> {
        Self::builder()
            .country_code(country_code)
            .build(client_id, client_secret)
    }

    /// Creates a builder for custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The bearer token obtained at construction.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one authenticated request and returns the raw response body.
    ///
    /// The URL is the configured API URL followed by `path` and the encoded
    /// query string. `country_code` is always part of the query; `params`
    /// adds the non-zero fields of a parameter object.
    ///
    /// # Errors
    ///
    /// - [`TidalError::Transport`] when the request could not be sent
    /// - [`TidalError::UnexpectedStatus`] for any status other than 200 or 207
    pub fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&dyn QueryParams>,
    ) -> Result<Vec<u8>> {
        self.request_in(method, path, &self.country_code, params)
    }

    fn request_in(
        &self,
        method: Method,
        path: &str,
        country_code: &str,
        params: Option<&dyn QueryParams>,
    ) -> Result<Vec<u8>> {
        let url = format!(
            "{}{}?{}",
            self.config.api_url,
            path,
            encode_params(country_code, params)
        );

        let request = HttpRequest {
            method,
            url,
            headers: vec![
                (CONTENT_TYPE, self.config.content_type.clone()),
                (AUTHORIZATION, format!("Bearer {}", self.token)),
                (ACCEPT, self.config.content_type.clone()),
            ],
            body: None,
        };

        transport::process_request(self.http.as_ref(), request)
    }

    /// GETs `path` and decodes the body as `T`, naming `endpoint` on failure.
    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        params: Option<&dyn QueryParams>,
    ) -> Result<T> {
        let body = self
            .request(Method::GET, path, params)
            .map_err(|e| e.at(endpoint))?;
        decode(endpoint, &body)
    }

    /// GETs a single `{"resource": ...}` document.
    fn get_resource<T: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> Result<T> {
        let document: Resource<T> = self.get(endpoint, path, None)?;
        Ok(document.resource)
    }

    /// GETs one `{"data": [...]}` envelope and returns its resources.
    fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &dyn QueryParams,
    ) -> Result<Vec<T>> {
        let envelope: Envelope<T> = self.get(endpoint, path, Some(params))?;
        Ok(envelope.into_resources())
    }

    /// Collects every item of a paginated listing.
    ///
    /// Pages of [`PAGE_LIMIT`] items are requested with a growing offset and
    /// appended in the order the server returns them. The walk stops once
    /// the offset of the next page is past the reported total, which costs
    /// one trailing request when the total is an exact multiple of the page
    /// size.
    fn paginate<T: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            let params = PaginationParams {
                offset,
                limit: PAGE_LIMIT,
            };
            let page: Envelope<T> = self.get(endpoint, path, Some(&params))?;
            let total = page.metadata.total;
            items.extend(page.into_resources());

            match next_offset(offset, total) {
                Some(next) => offset = next,
                None => break,
            }
        }

        Ok(items)
    }
}

/// Offset of the page after the one at `offset`, or `None` once it would
/// pass `total` or leave the `u32` range.
fn next_offset(offset: u32, total: u32) -> Option<u32> {
    offset.checked_add(PAGE_LIMIT).filter(|next| *next <= total)
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| TidalError::Decode { endpoint, source })
}

fn require(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(TidalError::MissingParameter(name));
    }
    Ok(())
}

fn default_http() -> Box<dyn HttpClient> {
    Box::new(ReqwestClient::new())
}

/// Builder for configuring a [`Client`].
pub struct ClientBuilder {
    config: ClientConfig,
    country_code: String,
    http: Option<Box<dyn HttpClient>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::default(),
            country_code: String::new(),
            http: None,
        }
    }
}

impl ClientBuilder {
    /// Replaces all API coordinates at once.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a custom API base URL (useful for testing with mock servers).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set a custom OAuth token URL.
    pub fn oauth_url(mut self, url: impl Into<String>) -> Self {
        self.config.oauth_url = url.into();
        self
    }

    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Set the transport used for every request, the token exchange included.
    pub fn http_client(mut self, http: impl HttpClient + 'static) -> Self {
        self.http = Some(Box::new(http));
        self
    }

    /// Authenticates with the client credentials and builds the client.
    pub fn build(self, client_id: &str, client_secret: &str) -> Result<Client> {
        let http = self.http.unwrap_or_else(default_http);
        let token = auth::get_access_token(http.as_ref(), &self.config, client_id, client_secret)?;

        Ok(Client {
            config: self.config,
            country_code: self.country_code,
            token,
            http,
        })
    }

    /// Builds the client around a bearer token obtained elsewhere.
    pub fn build_with_token(self, token: impl Into<String>) -> Client {
        Client {
            config: self.config,
            country_code: self.country_code,
            token: token.into(),
            http: self.http.unwrap_or_else(default_http),
        }
    }
}
