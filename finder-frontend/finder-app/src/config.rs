use crate::error::{AppError, AppResult};
use leptos::prelude::*;
use serde::Deserialize;

/// Tunables for the search widget. Every field has a default so a page only has to
/// override what it cares about.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Recommendation endpoint, either a path on the current origin or an absolute URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Origin prepended to a relative endpoint when running outside a browser
    #[serde(default)]
    pub base_url: Option<String>,

    /// Number of recommendations requested (`k`)
    #[serde(default = "default_result_count")]
    pub result_count: u32,

    /// Quiet period after the last keystroke before a search fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,

    /// Shortest query, in characters, that schedules a search
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Image used when a faculty member has no picture
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Image swapped in when a picture fails to load
    #[serde(default = "default_offline_image")]
    pub offline_image: String,

    /// Entrance animation delay added per card
    #[serde(default = "default_card_stagger_ms")]
    pub card_stagger_ms: u32,

    /// Drop responses to searches that were in flight when the input was cleared
    #[serde(default)]
    pub discard_after_clear: bool,
}

fn default_endpoint() -> String {
    "/recommend".to_string()
}

fn default_result_count() -> u32 {
    9
}

fn default_debounce_ms() -> u32 {
    500
}

fn default_min_query_len() -> usize {
    3
}

fn default_placeholder_image() -> String {
    "https://via.placeholder.com/300x200?text=NO+IMAGE".to_string()
}

fn default_offline_image() -> String {
    "https://via.placeholder.com/300x200?text=OFFLINE".to_string()
}

fn default_card_stagger_ms() -> u32 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            base_url: None,
            result_count: default_result_count(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            placeholder_image: default_placeholder_image(),
            offline_image: default_offline_image(),
            card_stagger_ms: default_card_stagger_ms(),
            discard_after_clear: false,
        }
    }
}

impl SearchConfig {
    /// Parses a JSON config block, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// `block` is the text of the page's config element, `None` when the page doesn't have one.
    pub fn from_page_block(block: anyhow::Result<Option<String>>) -> AppResult<Self> {
        match block? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::InvalidConfig("endpoint is empty".to_string()));
        }
        if self.result_count == 0 {
            return Err(AppError::InvalidConfig(
                "result_count must be at least 1".to_string(),
            ));
        }
        if self.min_query_len == 0 {
            return Err(AppError::InvalidConfig(
                "min_query_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn provide_search_config(config: SearchConfig) {
    provide_context(config);
}

pub fn use_search_config() -> SearchConfig {
    use_context::<SearchConfig>().unwrap_or_default()
}
