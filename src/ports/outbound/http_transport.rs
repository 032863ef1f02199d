use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// An outgoing GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// When false, 3xx responses are returned as-is with their `Location` header
    pub follow_redirects: bool,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            follow_redirects: true,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}

/// A received response
///
/// Header names are stored lowercase. Bodies are decoded as UTF-8 text
/// since every resource the resolver reads is JSON or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// HttpTransport port for issuing GET requests
///
/// Implementations return `Err` only for transport failures (DNS, TLS,
/// timeouts, connection resets). Any HTTP status, including 4xx/5xx, is an
/// `Ok` response for the caller to interpret.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
