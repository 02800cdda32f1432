use crate::utils::error::{HttpResourceError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 驗證伺服器位址：空字串代表同源（相對路徑），其餘必須是 http/https
pub fn validate_server_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.is_empty() {
        return Ok(());
    }
    validate_url(field_name, addr)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HttpResourceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HttpResourceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HttpResourceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("server.addr", "https://example.com").is_ok());
        assert!(validate_url("server.addr", "http://195.60.229.164:3555").is_ok());
        assert!(validate_url("server.addr", "").is_err());
        assert!(validate_url("server.addr", "invalid-url").is_err());
        assert!(validate_url("server.addr", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_server_addr_allows_same_origin() {
        assert!(validate_server_addr("server.addr", "").is_ok());
        assert!(validate_server_addr("server.addr", "ws://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("header", "x").is_ok());
        assert!(validate_non_empty_string("header", "   ").is_err());
    }
}
