use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

const USER_AGENT: &str = concat!("word-lookup/", env!("CARGO_PKG_VERSION"));

/// Status and body of an HTTP response, as far as the lookup cares.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Without a timeout the request waits as long as reqwest's default does.
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;
        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;
        Ok(HttpResponse { status, body })
    }
}
