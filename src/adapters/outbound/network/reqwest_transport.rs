use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// ReqwestTransport adapter issuing real HTTP requests
///
/// Holds two clients sharing the same timeout and user agent: one follows
/// redirects, the other returns 3xx responses untouched so the redirect
/// resolver can read their `Location` header.
pub struct ReqwestTransport {
    client: reqwest::Client,
    no_redirect_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        let no_redirect_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            no_redirect_client,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let client = if request.follow_redirects {
            &self.client
        } else {
            &self.no_redirect_client
        };

        let mut builder = client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
