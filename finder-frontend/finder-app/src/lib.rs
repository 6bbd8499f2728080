pub mod api;
pub mod cards;
pub mod components;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;

use crate::components::search_widget::SearchWidget;
use crate::config::{provide_search_config, SearchConfig};
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App(config: SearchConfig, initial_query: Option<String>) -> impl IntoView {
    provide_meta_context();
    provide_search_config(config);

    view! {
        <Title text="Faculty Finder" />
        <main class="finder-page">
            <header class="finder-header">
                <h1>"Faculty Finder"</h1>
                <p>"Describe a research interest to find faculty working on it."</p>
            </header>
            <SearchWidget initial_query />
        </main>
    }
}
