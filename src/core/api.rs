use crate::core::url::form_url;
use crate::domain::endpoints::{ALL_CLIENTS, CHECK_KEY, CLIENT, MARKER, PERM, STAT};
use crate::domain::model::QueryParam;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use serde_json::Value;

/// c2c 伺服器 API 的薄包裝，每個路徑一個方法
pub struct ServerApi<T: Transport> {
    transport: T,
    base: String,
}

impl<T: Transport> ServerApi<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn stat(&self, params: &[QueryParam]) -> Result<Value> {
        self.transport.get(STAT, params).await
    }

    pub async fn client(&self, params: &[QueryParam]) -> Result<Value> {
        self.transport.get(CLIENT, params).await
    }

    pub async fn update_client(&self, body: &Value, params: &[QueryParam]) -> Result<Value> {
        self.transport.post(CLIENT, body, params).await
    }

    pub async fn all_clients(&self, params: &[QueryParam]) -> Result<Value> {
        self.transport.get(ALL_CLIENTS, params).await
    }

    pub async fn check_key(&self, params: &[QueryParam]) -> Result<Value> {
        self.transport.get(CHECK_KEY, params).await
    }

    pub async fn perm(&self, params: &[QueryParam]) -> Result<Value> {
        self.transport.get(PERM, params).await
    }

    /// 標記圖片只回傳網址，不當作 JSON 取得
    pub fn marker_url(&self, params: &[QueryParam]) -> String {
        form_url(&self.base, MARKER, params)
    }
}
