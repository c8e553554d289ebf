//! HTTP capability used by the fetch pipeline.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use config::HttpConfig;
use indexmap::IndexMap;
use page_model::HttpMethod;
use parking_lot::Mutex;
use tracing::debug;

use crate::{Error, Result};

/// A fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Header names are unique; the last configured value wins.
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait abstraction over the network so stores can be exercised without a server.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client with the configured timeout and user agent.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(url = %request.url, status, "http response");
        Ok(HttpResponse { status, body })
    }
}

/// Test double that records requests and serves canned responses by URL prefix.
///
/// Unmatched URLs get a 404.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    calls: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    routes: Arc<Mutex<Vec<(String, HttpResponse)>>>,
    fail: Arc<AtomicBool>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for URLs starting with `prefix`. Later routes take precedence.
    pub fn route(&self, prefix: &str, response: HttpResponse) {
        self.routes.lock().push((prefix.to_string(), response));
    }

    /// Make every send fail as a transport error.
    pub fn set_fail(&self, v: bool) {
        self.fail.store(v, Ordering::SeqCst);
    }

    /// `"METHOD url"` for each request, in send order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls
            .lock()
            .push(format!("{} {}", request.method, request.url));
        self.requests.lock().push(request.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Msg("network unreachable".into()));
        }
        let routes = self.routes.lock();
        Ok(routes
            .iter()
            .rev()
            .find(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| HttpResponse::new(404, "not found")))
    }
}
