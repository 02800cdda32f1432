use crate::domain::endpoints::SERVER_ADDR;
use crate::domain::model::TransportKind;
use crate::utils::error::{HttpResourceError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_server_addr, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default)]
    pub transport: TransportKind,
}

fn default_addr() -> String {
    SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            transport: TransportKind::default(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HttpResourceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SERVER_ADDR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HttpResourceError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn server_addr(&self) -> &str {
        &self.server.addr
    }

    pub fn transport(&self) -> TransportKind {
        self.server.transport
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.headers.clone().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_server_addr("server.addr", &self.server.addr)?;

        if let Some(headers) = &self.headers {
            for key in headers.keys() {
                validate_non_empty_string("headers", key)?;
            }
        }

        Ok(())
    }
}
