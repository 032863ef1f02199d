//! In-memory `HttpTransport` for unit tests.

use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Serves canned responses by exact URL and records every request.
///
/// Unknown URLs get a 404 with an empty body.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, response: HttpResponse) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Respond(response));
        self
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().get(&request.url) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}
