use crate::domain::model::QueryParam;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// GET/POST 呼叫的共同介面，回傳解析後的 JSON 內容
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, command: &str, params: &[QueryParam]) -> Result<Value>;
    async fn post(&self, command: &str, body: &Value, params: &[QueryParam]) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, command: &str, params: &[QueryParam]) -> Result<Value> {
        (**self).get(command, params).await
    }

    async fn post(&self, command: &str, body: &Value, params: &[QueryParam]) -> Result<Value> {
        (**self).post(command, body, params).await
    }
}
