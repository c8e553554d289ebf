//! Turning a resolved API config into a request, and a response into cached data.

use indexmap::IndexMap;
use page_model::{ApiDataSourceConfig, KeyValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Value, json};

use crate::{Error, HttpClient, HttpRequest, Result};

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Data recorded when a fetch fails for any reason.
pub fn failed_fetch() -> Value {
    json!({ "error": "Failed to fetch" })
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Header map from ordered pairs: empty names are skipped, later duplicates win.
pub fn build_headers(pairs: &[KeyValue]) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for kv in pairs.iter().filter(|kv| !kv.key.is_empty()) {
        out.insert(kv.key.clone(), kv.value.clone());
    }
    out
}

/// Append the encoded query built from `params` (pairs with empty keys skipped).
pub fn build_url(url: &str, params: &[KeyValue]) -> String {
    let query = params
        .iter()
        .filter(|kv| !kv.key.is_empty())
        .map(|kv| format!("{}={}", encode(&kv.key), encode(&kv.value)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        return url.to_string();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{query}")
}

/// Request for an already-resolved config. GET and HEAD never carry a body.
pub fn build_request(config: &ApiDataSourceConfig) -> HttpRequest {
    HttpRequest {
        method: config.method,
        url: build_url(&config.url, &config.params),
        headers: build_headers(&config.headers),
        body: config
            .body
            .clone()
            .filter(|_| config.method.allows_body()),
    }
}

/// Send `request` and parse a 2xx body as JSON.
pub async fn perform(http: &dyn HttpClient, request: HttpRequest) -> Result<Value> {
    let response = http.send(request).await?;
    if !response.is_success() {
        return Err(Error::Status(response.status));
    }
    Ok(serde_json::from_str(&response.body)?)
}
