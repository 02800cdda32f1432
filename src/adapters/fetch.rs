use crate::core::url::form_url;
use crate::domain::model::QueryParam;
use crate::domain::ports::Transport;
use crate::utils::error::{HttpResourceError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// fetch 風格的傳輸：GET 檢查狀態碼，POST 不檢查，直接解析回應內容
#[derive(Debug, Clone)]
pub struct FetchTransport {
    client: Client,
    base: String,
}

impl FetchTransport {
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

    fn with_headers(request: RequestBuilder) -> RequestBuilder {
        request
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
    }

    async fn send_get(&self, url: &str) -> Result<Value> {
        let response = Self::with_headers(self.client.get(url)).send().await?;
        let status = response.status();
        tracing::debug!("📡 GET {} status: {}", url, status);

        if !status.is_success() {
            return Err(HttpResourceError::from_status(status));
        }
        Ok(response.json::<Value>().await?)
    }

    async fn send_post(&self, url: &str, body: String) -> Result<Value> {
        let response = Self::with_headers(self.client.post(url))
            .body(body)
            .send()
            .await?;
        tracing::debug!("📡 POST {} status: {}", url, response.status());
        Ok(response.json::<Value>().await?)
    }

    /// 以原樣字串作為 body 送出 POST
    pub async fn post_raw(
        &self,
        command: &str,
        body: impl Into<String>,
        params: &[QueryParam],
    ) -> Result<Value> {
        let url = form_url(&self.base, command, params);
        tracing::debug!("📡 POST {}", url);

        let result = self.send_post(&url, body.into()).await;

        tracing::debug!("📡 POST {} finished", url);
        result
    }
}

#[async_trait]
impl Transport for FetchTransport {
    async fn get(&self, command: &str, params: &[QueryParam]) -> Result<Value> {
        let url = form_url(&self.base, command, params);
        tracing::debug!("📡 GET {}", url);

        let result = self.send_get(&url).await;

        tracing::debug!("📡 GET {} finished", url);
        result
    }

    async fn post(&self, command: &str, body: &Value, params: &[QueryParam]) -> Result<Value> {
        self.post_raw(command, body.to_string(), params).await
    }
}
