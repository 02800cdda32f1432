use std::time::Duration;

/// 等待 `timeout` 後回傳 `value`
pub async fn resolve_after<T>(timeout: Duration, value: T) -> T {
    tokio::time::sleep(timeout).await;
    value
}
