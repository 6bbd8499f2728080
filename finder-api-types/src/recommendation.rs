use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown when a faculty member has no topics on record.
pub const DEFAULT_TOPICS: &str = "General Research";

/// One ranked faculty member returned by `GET /recommend`.
///
/// The backend sends the whole faculty row, so anything not listed here is ignored.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub faculty_type: Option<String>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub citations: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub works_count: Option<u64>,
    #[serde(default)]
    pub topics: Option<String>,
}

impl Recommendation {
    pub fn citations_or_default(&self) -> u64 {
        self.citations.unwrap_or(0)
    }

    pub fn works_or_default(&self) -> u64 {
        self.works_count.unwrap_or(0)
    }

    /// Empty strings count as missing, same as an absent field.
    pub fn topics_or_default(&self) -> &str {
        self.topics
            .as_deref()
            .filter(|topics| !topics.is_empty())
            .unwrap_or(DEFAULT_TOPICS)
    }

    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }
}

/// Counts come out of a dataframe on the backend, so they may arrive as floats or as
/// numeric strings. Anything else is treated as missing.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(clamp_count)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(clamp_count))
        }
        _ => None,
    }))
}

fn clamp_count(float: f64) -> u64 {
    if float.is_finite() && float > 0.0 {
        float.trunc() as u64
    } else {
        0
    }
}

/// Envelope of `GET /recommend?query=&k=`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct RecommendResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl RecommendResponse {
    /// Decodes a response body. Any JSON that isn't an object (or an error object like
    /// `{"detail": ...}`) is treated as a response without recommendations.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }

    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.recommendations.unwrap_or_default()
    }
}
