use crate::{
    cards::{card_views, CardView},
    config::SearchConfig,
    debounce::{DebounceTicket, Debouncer},
    error::{AppError, AppResult},
};
use finder_api_types::{RecommendResponse, Recommendation};
use log::{debug, error};

/// What the widget is currently showing.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Results(Vec<Recommendation>),
    Empty,
    /// The request or its body failed. Looks the same as `Idle` to the user.
    Failed,
}

/// Which page regions are visible. Only ever built from a [`SearchState`], so at most one of
/// `loading`, `results` and `empty` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Visibility {
    pub loading: bool,
    pub results: bool,
    pub empty: bool,
    pub stats: bool,
}

impl SearchState {
    pub fn visibility(&self) -> Visibility {
        match self {
            SearchState::Idle | SearchState::Failed => Visibility::default(),
            SearchState::Loading => Visibility {
                loading: true,
                ..Default::default()
            },
            SearchState::Results(_) => Visibility {
                results: true,
                stats: true,
                ..Default::default()
            },
            SearchState::Empty => Visibility {
                empty: true,
                ..Default::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Start a timer and hand the ticket back to [`SearchController::fire`] when it elapses.
    Scheduled(DebounceTicket),
    Cleared,
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer search was issued after this one, the response was dropped.
    Stale,
}

/// Input to request to state. Holds no timers or futures itself: the caller sleeps on the
/// tickets and performs the requests, this decides what they mean.
#[derive(Debug, Clone)]
pub struct SearchController {
    config: SearchConfig,
    query: String,
    pending: Debouncer<String>,
    generation: u64,
    state: SearchState,
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            query: String::new(),
            pending: Debouncer::new(),
            generation: 0,
            state: SearchState::Idle,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn is_debounce_armed(&self) -> bool {
        self.pending.is_armed()
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    pub fn on_input(&mut self, text: &str) -> InputAction {
        self.query = text.to_string();
        let length = text.chars().count();
        if length >= self.config.min_query_len {
            let ticket = self.pending.arm(text.to_string());
            debug!("search for {text:?} scheduled in {}ms", self.config.debounce_ms);
            InputAction::Scheduled(ticket)
        } else if length == 0 {
            self.reset();
            InputAction::Cleared
        } else {
            self.pending.cancel();
            InputAction::Ignored
        }
    }

    /// The debounce timer for `ticket` elapsed.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchRequest> {
        let query = self.pending.settle(ticket)?;
        Some(self.begin(query))
    }

    /// Searches right away, skipping the debounce. Same length floor as typing.
    pub fn submit(&mut self, text: &str) -> AppResult<SearchRequest> {
        self.query = text.to_string();
        self.pending.cancel();
        if text.trim().is_empty() {
            return Err(AppError::EmptyQuery);
        }
        let length = text.chars().count();
        if length < self.config.min_query_len {
            return Err(AppError::QueryTooShort(length, self.config.min_query_len));
        }
        Ok(self.begin(text.to_string()))
    }

    /// Searches for a query handed in through the page link (`?q=`). Any non-blank query is
    /// accepted, a link can name a two letter topic.
    pub fn open_link(&mut self, text: &str) -> AppResult<SearchRequest> {
        self.query = text.to_string();
        self.pending.cancel();
        if text.trim().is_empty() {
            return Err(AppError::EmptyQuery);
        }
        Ok(self.begin(text.to_string()))
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.reset();
    }

    pub fn complete(
        &mut self,
        generation: u64,
        result: AppResult<RecommendResponse>,
    ) -> Completion {
        if generation != self.generation {
            debug!(
                "dropping response for search {generation}, latest is {}",
                self.generation
            );
            return Completion::Stale;
        }
        self.state = match result {
            Ok(response) => {
                let recommendations = response.into_recommendations();
                if recommendations.is_empty() {
                    SearchState::Empty
                } else {
                    SearchState::Results(recommendations)
                }
            }
            Err(e) => {
                error!("Search failed: {e}");
                SearchState::Failed
            }
        };
        Completion::Applied
    }

    pub fn result_count(&self) -> usize {
        match &self.state {
            SearchState::Results(recommendations) => recommendations.len(),
            _ => 0,
        }
    }

    pub fn cards(&self) -> Vec<CardView> {
        match &self.state {
            SearchState::Results(recommendations) => card_views(recommendations, &self.config),
            _ => Vec::new(),
        }
    }

    fn begin(&mut self, query: String) -> SearchRequest {
        self.generation += 1;
        self.state = SearchState::Loading;
        debug!("search {} issued for {query:?}", self.generation);
        SearchRequest {
            generation: self.generation,
            query,
        }
    }

    fn reset(&mut self) {
        self.pending.cancel();
        self.state = SearchState::Idle;
        if self.config.discard_after_clear {
            // retire whatever is in flight
            self.generation += 1;
        }
    }
}
