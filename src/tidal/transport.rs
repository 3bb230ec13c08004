use reqwest::{Method, header::HeaderName};

use crate::error::{BoxError, Result, TidalError};

/// A fully prepared HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(HeaderName, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the value of the first header called `name`.
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status code and fully read body of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes HTTP requests on behalf of the client.
///
/// The default implementation is [`ReqwestClient`]. Tests plug in their own
/// implementation to serve canned responses without touching the network.
pub trait HttpClient {
    fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, BoxError>;
}

/// [`HttpClient`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<reqwest::blocking::Client> for ReqwestClient {
    fn from(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, BoxError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Sends `request` and returns the body of a 200 or 207 response.
///
/// Any other status is reported as [`TidalError::UnexpectedStatus`]; the body
/// of such a response is discarded.
pub(crate) fn process_request(http: &dyn HttpClient, request: HttpRequest) -> Result<Vec<u8>> {
    let url = request.url.clone();
    let response = http
        .execute(request)
        .map_err(|source| TidalError::Transport { url, source })?;

    match response.status {
        200 | 207 => Ok(response.body),
        status => Err(TidalError::UnexpectedStatus(status)),
    }
}
