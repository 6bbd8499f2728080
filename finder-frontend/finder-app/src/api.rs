use crate::{
    config::SearchConfig,
    error::{AppError, AppResult, SystemError},
};
use finder_api_types::RecommendResponse;
use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the characters `encodeURIComponent` leaves alone.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn recommend_url(config: &SearchConfig, query: &str) -> String {
    let separator = if config.endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{}{separator}query={}&k={}",
        config.endpoint,
        utf8_percent_encode(query, QUERY_COMPONENT),
        config.result_count
    )
}

/// Outside a browser there is no origin to resolve `/recommend` against.
#[cfg_attr(feature = "csr", allow(dead_code))]
fn absolute_url(config: &SearchConfig, url: String) -> AppResult<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url);
    }
    match &config.base_url {
        Some(base) => Ok(format!("{}{url}", base.trim_end_matches('/'))),
        None => Err(AppError::SystemError(SystemError::Message(format!(
            "{url} is relative and no base_url is configured"
        )))),
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        pub async fn fetch_recommendations(
            config: &SearchConfig,
            query: &str,
        ) -> AppResult<RecommendResponse> {
            let url = recommend_url(config, query);
            let response = gloo_net::http::Request::get(&url).send().await?;
            if !response.ok() {
                warn!("{url} returned status {}", response.status());
            }
            let body = response.text().await?;
            Ok(RecommendResponse::from_json(&body)?)
        }
    } else {
        pub async fn fetch_recommendations(
            config: &SearchConfig,
            query: &str,
        ) -> AppResult<RecommendResponse> {
            let url = absolute_url(config, recommend_url(config, query))?;
            let response = reqwest::get(&url).await?;
            let status = response.status();
            if !status.is_success() {
                warn!("{url} returned status {status}");
            }
            let body = response.text().await?;
            Ok(RecommendResponse::from_json(&body)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_as_percent_twenty() {
        let config = SearchConfig::default();
        assert_eq!(
            recommend_url(&config, "ai research"),
            "/recommend?query=ai%20research&k=9"
        );
    }

    #[test]
    fn matches_encode_uri_component() {
        let config = SearchConfig::default();
        assert_eq!(
            recommend_url(&config, "C++ & ML/AI?"),
            "/recommend?query=C%2B%2B%20%26%20ML%2FAI%3F&k=9"
        );
        assert_eq!(
            recommend_url(&config, "o'brien (chem) *-_.!~"),
            "/recommend?query=o'brien%20(chem)%20*-_.!~&k=9"
        );
        assert_eq!(
            recommend_url(&config, "café"),
            "/recommend?query=caf%C3%A9&k=9"
        );
    }

    #[test]
    fn uses_configured_count_and_existing_query_string() {
        let config = SearchConfig {
            endpoint: "/api/recommend?v=2".to_string(),
            result_count: 12,
            ..Default::default()
        };
        assert_eq!(
            recommend_url(&config, "nlp"),
            "/api/recommend?v=2&query=nlp&k=12"
        );
    }

    #[test]
    fn relative_urls_need_a_base() {
        let config = SearchConfig::default();
        assert!(absolute_url(&config, "/recommend?query=nlp&k=9".to_string()).is_err());

        let config = SearchConfig {
            base_url: Some("http://localhost:8000/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            absolute_url(&config, "/recommend?query=nlp&k=9".to_string()).unwrap(),
            "http://localhost:8000/recommend?query=nlp&k=9"
        );
        assert_eq!(
            absolute_url(&config, "https://finder.example.edu/recommend".to_string()).unwrap(),
            "https://finder.example.edu/recommend"
        );
    }
}
