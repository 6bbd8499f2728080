use crate::config::SearchConfig;
use finder_api_types::Recommendation;

/// Everything a result card displays, resolved from one recommendation.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub name: String,
    pub role: String,
    pub match_label: String,
    pub citations: u64,
    pub works: u64,
    pub topics: String,
    pub image_src: String,
    pub offline_src: String,
    pub animation_style: String,
}

impl CardView {
    pub fn new(index: usize, record: &Recommendation, config: &SearchConfig) -> Self {
        Self {
            index,
            name: record
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            role: record.faculty_type.clone().unwrap_or_default(),
            match_label: match_label(record.similarity_score),
            citations: record.citations_or_default(),
            works: record.works_or_default(),
            topics: record.topics_or_default().to_string(),
            image_src: record.image_or(&config.placeholder_image).to_string(),
            offline_src: config.offline_image.clone(),
            animation_style: animation_style(index, config.card_stagger_ms),
        }
    }
}

pub fn card_views(records: &[Recommendation], config: &SearchConfig) -> Vec<CardView> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| CardView::new(index, record, config))
        .collect()
}

/// Similarity as a whole percentage, rounding halves up.
pub fn match_label(score: Option<f64>) -> String {
    match score.filter(|score| score.is_finite()) {
        Some(score) => format!("{}%", (score * 100.0 + 0.5).floor() as i64),
        None => "N/A".to_string(),
    }
}

fn animation_style(index: usize, stagger_ms: u32) -> String {
    let delay = (index as f64 * stagger_ms as f64) / 1000.0;
    format!("animation: fadeInUp 0.5s ease backwards {delay}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_api_types::DEFAULT_TOPICS;

    fn record(score: Option<f64>) -> Recommendation {
        Recommendation {
            name: Some("Dr. X".to_string()),
            faculty_type: Some("Professor".to_string()),
            similarity_score: score,
            citations: Some(120),
            works_count: Some(5),
            topics: Some("ML".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn match_labels_round_like_the_page() {
        assert_eq!(match_label(Some(0.873)), "87%");
        assert_eq!(match_label(Some(0.91)), "91%");
        assert_eq!(match_label(Some(0.5)), "50%");
        assert_eq!(match_label(Some(0.994)), "99%");
        assert_eq!(match_label(Some(0.996)), "100%");
        assert_eq!(match_label(Some(1.0)), "100%");
        assert_eq!(match_label(Some(0.0)), "0%");
    }

    #[test]
    fn missing_score_is_labelled() {
        assert_eq!(match_label(None), "N/A");
        assert_eq!(match_label(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn card_shows_record_fields() {
        let config = SearchConfig::default();
        let card = CardView::new(0, &record(Some(0.91)), &config);
        assert_eq!(card.name, "Dr. X");
        assert_eq!(card.role, "Professor");
        assert_eq!(card.match_label, "91%");
        assert_eq!(card.citations, 120);
        assert_eq!(card.works, 5);
        assert_eq!(card.topics, "ML");
        assert_eq!(card.offline_src, config.offline_image);
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let config = SearchConfig::default();
        let card = CardView::new(0, &Recommendation::default(), &config);
        assert_eq!(
            card.image_src,
            "https://via.placeholder.com/300x200?text=NO+IMAGE"
        );
        assert_eq!(card.name, "Unknown");
        assert_eq!(card.role, "");
        assert_eq!(card.topics, DEFAULT_TOPICS);
        assert_eq!(card.citations, 0);
    }

    #[test]
    fn cards_are_staggered_by_index() {
        let config = SearchConfig::default();
        let records = vec![record(Some(0.9)); 3];
        let cards = card_views(&records, &config);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards[0].animation_style,
            "animation: fadeInUp 0.5s ease backwards 0s"
        );
        assert_eq!(
            cards[2].animation_style,
            "animation: fadeInUp 0.5s ease backwards 0.2s"
        );
        assert_eq!(cards[2].index, 2);
    }
}
