use async_trait::async_trait;
use spdx_url_resolver::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock HttpTransport serving canned responses and recording every request
///
/// URLs without a canned reply get a 404 with an empty body, unless the
/// transport was built with [`offline`](Self::offline), in which case they
/// fail like an unreachable network.
pub struct RecordingTransport {
    responses: Mutex<HashMap<String, HttpResponse>>,
    failures: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<HttpRequest>>,
    offline: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new()
        }
    }

    pub fn with_response(self, url: &str, response: HttpResponse) -> Self {
        self.set_response(url, response);
        self
    }

    pub fn with_failure(self, url: &str, message: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(url.to_string(), message.to_string());
        self
    }

    /// Replaces the canned reply for `url`, clearing any failure for it
    pub fn set_response(&self, url: &str, response: HttpResponse) {
        self.failures.lock().unwrap().remove(url);
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests whose URL is exactly `url`
    pub fn count_for(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = self.failures.lock().unwrap().get(&request.url) {
            anyhow::bail!("{}", message);
        }
        if let Some(response) = self.responses.lock().unwrap().get(&request.url) {
            return Ok(response.clone());
        }
        if self.offline {
            anyhow::bail!("network unreachable: {}", request.url);
        }
        Ok(HttpResponse::new(404, ""))
    }
}
