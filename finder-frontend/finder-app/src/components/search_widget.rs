use crate::{
    api::fetch_recommendations,
    components::{loading::Loading, result_card::ResultCard},
    config::use_search_config,
    controller::{InputAction, SearchController, SearchRequest},
    debounce::DebounceTicket,
    error::AppResult,
};
use gloo_timers::future::TimeoutFuture;
use leptos::{prelude::*, task::spawn_local};
use log::debug;
use web_sys::KeyboardEvent;

async fn run_search(controller: RwSignal<SearchController>, request: SearchRequest) {
    let config = controller.with_untracked(|search| search.config().clone());
    let result = fetch_recommendations(&config, &request.query).await;
    controller.update(move |search| {
        search.complete(request.generation, result);
    });
}

/// Sleeps out the debounce window. Superseded timers still wake up, `fire` just hands them
/// nothing.
fn schedule(controller: RwSignal<SearchController>, ticket: DebounceTicket, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Some(request) = controller.try_update(|search| search.fire(ticket)).flatten() {
            run_search(controller, request).await;
        }
    });
}

fn start(controller: RwSignal<SearchController>, attempt: Option<AppResult<SearchRequest>>) {
    match attempt {
        Some(Ok(request)) => spawn_local(run_search(controller, request)),
        Some(Err(e)) => debug!("not submitting: {e}"),
        None => {}
    }
}

#[component]
pub fn SearchWidget(initial_query: Option<String>) -> impl IntoView {
    let config = use_search_config();
    let delay_ms = config.debounce_ms;
    let controller = RwSignal::new(SearchController::new(config));

    // memos so a keystroke that doesn't change what's shown doesn't rebuild the grid
    let visibility = Memo::new(move |_| controller.with(|search| search.visibility()));
    let count = Memo::new(move |_| controller.with(|search| search.result_count()));
    let cards = Memo::new(move |_| controller.with(|search| search.cards()));
    let query = Memo::new(move |_| controller.with(|search| search.query().to_string()));

    if let Some(text) = initial_query.filter(|text| !text.trim().is_empty()) {
        start(controller, controller.try_update(|search| search.open_link(&text)));
    }

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        if let Some(InputAction::Scheduled(ticket)) =
            controller.try_update(|search| search.on_input(&text))
        {
            schedule(controller, ticket, delay_ms);
        }
    };
    let on_keydown = move |e: KeyboardEvent| match e.key().as_str() {
        "Enter" => {
            let text = query.get_untracked();
            start(controller, controller.try_update(|search| search.submit(&text)));
        }
        "Escape" => controller.update(|search| search.clear()),
        _ => {}
    };

    view! {
        <section class="finder">
            <input
                id="searchInput"
                class="search-input"
                type="text"
                placeholder="Search by name, research area or topic..."
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <div id="statsBar" class="stats-bar" class:hidden=move || !visibility.get().stats>
                "Found "
                <span id="resultCount">{move || count.get()}</span>
                " matching faculty"
            </div>
            <div id="loading" class:hidden=move || !visibility.get().loading>
                <Loading />
            </div>
            <div id="noResults" class="no-results" class:hidden=move || !visibility.get().empty>
                "No matching faculty found. Try a different query."
            </div>
            <div id="resultsGrid" class="results-grid" class:hidden=move || !visibility.get().results>
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <ResultCard card /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
