use crate::utils::error::HttpResourceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單一查詢參數，組成 `key=value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl<K: Into<String>, V: ToString> From<(K, V)> for QueryParam {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for QueryParam {
    type Err = HttpResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(HttpResourceError::InvalidConfigValueError {
                field: "param".to_string(),
                value: s.to_string(),
                reason: "Expected key=value".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Fetch,
    #[default]
    Client,
}

impl FromStr for TransportKind {
    type Err = HttpResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fetch" => Ok(TransportKind::Fetch),
            "client" => Ok(TransportKind::Client),
            other => Err(HttpResourceError::InvalidConfigValueError {
                field: "transport".to_string(),
                value: other.to_string(),
                reason: "Valid transports: fetch, client".to_string(),
            }),
        }
    }
}
