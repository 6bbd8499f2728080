mod recommendation;

pub use recommendation::{RecommendResponse, Recommendation, DEFAULT_TOPICS};
