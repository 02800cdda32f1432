use crate::domain::model::QueryParam;

/// 組合 `base + command + "?" + key=value&...`
///
/// 參數依呼叫順序排列，不做 percent-encoding；即使沒有參數也保留 `?`。
pub fn form_url(base: &str, command: &str, params: &[QueryParam]) -> String {
    let query = params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("&");
    format!("{}{}?{}", base, command, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::endpoints::{CHECK_KEY, STAT};

    #[test]
    fn test_form_url_without_params() {
        assert_eq!(form_url("", STAT, &[]), "/api/v1/info?");
    }

    #[test]
    fn test_form_url_joins_params_in_order() {
        let params = vec![QueryParam::new("key", "abc"), QueryParam::new("id", 7)];
        assert_eq!(
            form_url("https://195.60.229.164:3555", CHECK_KEY, &params),
            "https://195.60.229.164:3555/api/v1/checkKey?key=abc&id=7"
        );
    }

    #[test]
    fn test_form_url_does_not_encode() {
        let params = vec![QueryParam::new("name", "a b&c")];
        assert_eq!(form_url("", "/x", &params), "/x?name=a b&c");
    }
}
