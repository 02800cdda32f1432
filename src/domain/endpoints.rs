use crate::utils::error::HttpResourceError;
use std::fmt;
use std::str::FromStr;

pub const STAT: &str = "/api/v1/info";
pub const CLIENT: &str = "/api/v1/client";
pub const ALL_CLIENTS: &str = "/api/v1/clients";
pub const CHECK_KEY: &str = "/api/v1/checkKey";
pub const PERM: &str = "/api/v1/perm";
pub const MARKER: &str = "/loc.png";

/// 預設伺服器位址，空字串表示與呼叫端同源
pub const SERVER_ADDR: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stat,
    Client,
    AllClients,
    CheckKey,
    Perm,
    Marker,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Stat => STAT,
            Endpoint::Client => CLIENT,
            Endpoint::AllClients => ALL_CLIENTS,
            Endpoint::CheckKey => CHECK_KEY,
            Endpoint::Perm => PERM,
            Endpoint::Marker => MARKER,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Stat => "stat",
            Endpoint::Client => "client",
            Endpoint::AllClients => "all-clients",
            Endpoint::CheckKey => "check-key",
            Endpoint::Perm => "perm",
            Endpoint::Marker => "marker",
        }
    }

    pub fn all() -> [Endpoint; 6] {
        [
            Endpoint::Stat,
            Endpoint::Client,
            Endpoint::AllClients,
            Endpoint::CheckKey,
            Endpoint::Perm,
            Endpoint::Marker,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = HttpResourceError;

    /// 接受名稱 (`check-key`) 或完整路徑 (`/api/v1/checkKey`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Endpoint::all()
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(needle) || e.path() == needle)
            .ok_or_else(|| HttpResourceError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown endpoint. Valid endpoints: {}",
                    Endpoint::all()
                        .iter()
                        .map(|e| e.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}
