use crate::adapters::{build_transport, http_client, request, FetchTransport};
use crate::config::{CliConfig, TomlConfig};
use crate::core::url::form_url;
use crate::domain::endpoints::Endpoint;
use crate::domain::model::TransportKind;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;

/// 依命令列參數執行一次呼叫，回傳要輸出的 JSON
pub async fn run(cli: &CliConfig, config: &TomlConfig) -> Result<Value> {
    let client = http_client(&config.headers())?;

    if cli.raw_url {
        let data = cli.data.as_deref().map(serde_json::from_str::<Value>).transpose()?
            .filter(|d| !d.is_null());
        let method = if data.is_some() { Method::POST } else { Method::GET };
        let value = request(&client, &cli.endpoint, method, data.as_ref()).await;
        return Ok(value.unwrap_or(Value::Null));
    }

    let endpoint: Endpoint = cli.endpoint.parse()?;
    let base = config.server_addr();

    if endpoint == Endpoint::Marker {
        if cli.data.is_some() {
            tracing::warn!("⚠️ {} is an image URL, ignoring --data", endpoint);
        }
        return Ok(Value::String(form_url(base, endpoint.path(), &cli.params)));
    }

    tracing::info!("📡 {} {}", if cli.data.is_some() { "POST" } else { "GET" }, endpoint);

    match (&cli.data, config.transport()) {
        (Some(data), TransportKind::Fetch) => {
            FetchTransport::with_client(client, base)
                .post_raw(endpoint.path(), data.clone(), &cli.params)
                .await
        }
        (Some(data), kind) => {
            let body: Value = serde_json::from_str(data)?;
            build_transport(kind, client, base)
                .post(endpoint.path(), &body, &cli.params)
                .await
        }
        (None, kind) => {
            build_transport(kind, client, base)
                .get(endpoint.path(), &cli.params)
                .await
        }
    }
}
