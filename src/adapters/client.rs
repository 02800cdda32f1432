use crate::core::url::form_url;
use crate::domain::endpoints::SERVER_ADDR;
use crate::domain::model::QueryParam;
use crate::domain::ports::Transport;
use crate::utils::error::{HttpResourceError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

/// HTTP client 函式庫風格的傳輸：任何非 2xx 狀態都視為失敗
#[derive(Debug, Clone)]
pub struct ClientTransport {
    client: Client,
    base: String,
}

impl ClientTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn into_data(response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(HttpResourceError::from_status(status));
        }
        let text = response.text().await?;
        Ok(parse_data(text))
    }
}

/// 內容不是 JSON 時保留原始文字，空內容得到 `""`
fn parse_data(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

impl Default for ClientTransport {
    fn default() -> Self {
        Self::new(SERVER_ADDR)
    }
}

#[async_trait]
impl Transport for ClientTransport {
    async fn get(&self, command: &str, params: &[QueryParam]) -> Result<Value> {
        let url = form_url(&self.base, command, params);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("📡 GET {} status: {}", url, response.status());
        Self::into_data(response).await
    }

    async fn post(&self, command: &str, body: &Value, params: &[QueryParam]) -> Result<Value> {
        let url = form_url(&self.base, command, params);
        tracing::debug!("📡 POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        tracing::debug!("📡 POST {} status: {}", url, response.status());
        Self::into_data(response).await
    }
}
