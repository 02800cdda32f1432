// Adapters layer: concrete HTTP implementations of the transport port.

pub mod client;
pub mod fetch;
pub mod request;

use crate::domain::model::TransportKind;
use crate::domain::ports::Transport;
use crate::utils::error::{HttpResourceError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;

pub use client::ClientTransport;
pub use fetch::FetchTransport;
pub use request::request;

/// 預設使用 HTTP client 風格
pub type DefaultTransport = ClientTransport;

/// 建立帶有預設標頭的 `reqwest::Client`
pub fn http_client(headers: &HashMap<String, String>) -> Result<Client> {
    let mut default_headers = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            HttpResourceError::InvalidConfigValueError {
                field: "headers".to_string(),
                value: key.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            HttpResourceError::InvalidConfigValueError {
                field: format!("headers.{}", key),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            }
        })?;
        default_headers.insert(name, value);
    }

    Ok(Client::builder().default_headers(default_headers).build()?)
}

pub fn build_transport(kind: TransportKind, client: Client, base: &str) -> Box<dyn Transport> {
    tracing::debug!("Using {:?} transport against '{}'", kind, base);
    match kind {
        TransportKind::Fetch => Box::new(FetchTransport::with_client(client, base)),
        TransportKind::Client => Box::new(ClientTransport::with_client(client, base)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_http_client_rejects_bad_header_name() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        assert!(http_client(&headers).is_err());
    }

    #[tokio::test]
    async fn test_default_headers_are_sent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/info")
                .header("x-session", "abc");
            then.status(200).json_body(json!({}));
        });

        let mut headers = HashMap::new();
        headers.insert("X-Session".to_string(), "abc".to_string());
        let client = http_client(&headers).unwrap();

        for kind in [TransportKind::Fetch, TransportKind::Client] {
            let transport = build_transport(kind, client.clone(), &server.base_url());
            transport.get("/api/v1/info", &[]).await.unwrap();
        }

        mock.assert_hits(2);
    }
}
