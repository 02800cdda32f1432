pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{QueryParam, TransportKind};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "httpresource")]
#[command(about = "Call the c2c server API and print the JSON response")]
pub struct CliConfig {
    /// Endpoint name (stat, client, all-clients, check-key, perm, marker) or path.
    /// With --raw-url, the full URL to request.
    pub endpoint: String,

    #[arg(long, help = "Base address of the server, overrides the config file")]
    pub server_addr: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Transport flavour: fetch or client")]
    pub transport: Option<TransportKind>,

    #[arg(long = "param", help = "Query parameter as key=value, repeatable")]
    pub params: Vec<QueryParam>,

    #[arg(long, help = "JSON body; switches the call to POST")]
    pub data: Option<String>,

    #[arg(long, help = "Request the endpoint argument as-is and print null on failure")]
    pub raw_url: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn effective_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(addr) = &self.server_addr {
            config.server.addr = addr.clone();
        }
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }

        config.validate()?;
        Ok(config)
    }
}
