#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, fs, path::PathBuf, rc::Rc};

use tidalcat::{
    Client,
    error::BoxError,
    tidal::{HttpClient, HttpRequest, HttpResponse},
};

pub type RequestLog = Rc<RefCell<Vec<HttpRequest>>>;

enum Reply {
    Response(HttpResponse),
    Failure(String),
}

/// Serves queued replies in order and records every request it receives.
/// The last queued reply is repeated once the queue runs out.
pub struct MockHttpClient {
    replies: RefCell<VecDeque<Reply>>,
    requests: RequestLog,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Queues a response with a raw body.
    pub fn reply(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.replies.borrow_mut().push_back(Reply::Response(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queues a response whose body is a file of `tests/testdata`.
    pub fn fixture(self, status: u16, name: &str) -> Self {
        let body = load_fixture(name);
        self.reply(status, body)
    }

    pub fn json(self, status: u16, value: serde_json::Value) -> Self {
        self.reply(status, value.to_string())
    }

    /// Queues a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> RequestLog {
        Rc::clone(&self.requests)
    }
}

impl HttpClient for MockHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.borrow_mut().push(request);

        let mut replies = self.replies.borrow_mut();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            None
        };

        match reply.as_ref().or(replies.front()) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Failure(message)) => Err(message.clone().into()),
            None => Err("no reply queued".into()),
        }
    }
}

pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("could not load {}: {}", path.display(), e))
}

/// Builds an already authenticated client for country `AU` around `mock`.
pub fn client(mock: MockHttpClient) -> (Client, RequestLog) {
    let requests = mock.requests();
    let client = Client::builder()
        .country_code("AU")
        .http_client(mock)
        .build_with_token("test-token");
    (client, requests)
}

/// A page of a list envelope holding `count` tracks numbered from `first`.
pub fn track_page(first: u32, count: u32, total: u32) -> serde_json::Value {
    let data = (first..first + count)
        .map(|n| {
            serde_json::json!({
                "id": n.to_string(),
                "status": 200,
                "message": "success",
                "resource": {
                    "id": n.to_string(),
                    "title": format!("Track {}", n),
                    "trackNumber": n + 1,
                    "volumeNumber": 1
                }
            })
        })
        .collect::<Vec<_>>();

    serde_json::json!({ "data": data, "metadata": { "total": total } })
}

pub fn urls(requests: &RequestLog) -> Vec<String> {
    requests.borrow().iter().map(|r| r.url.clone()).collect()
}
