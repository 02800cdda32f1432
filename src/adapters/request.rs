use crate::utils::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;

async fn try_request(client: &Client, url: &str, method: Method, data: Option<&Value>) -> Result<Value> {
    let mut request = client.request(method, url);

    // JSON null 視同沒有資料
    if let Some(data) = data.filter(|d| !d.is_null()) {
        request = request
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(data)?);
    }

    let response = request.send().await?;
    Ok(response.json::<Value>().await?)
}

/// 直接對 `url` 發出請求；失敗時記錄警告並回傳 `None`，不檢查狀態碼
pub async fn request(client: &Client, url: &str, method: Method, data: Option<&Value>) -> Option<Value> {
    match try_request(client, url, method.clone(), data).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("⚠️ {} {} failed: {}", method, url, e);
            None
        }
    }
}
