use crate::cards::CardView;
use leptos::prelude::*;

/// A single faculty card. Text goes through `view!`, so names and topics from the backend
/// are escaped rather than parsed as markup.
#[component]
pub fn ResultCard(card: CardView) -> impl IntoView {
    let CardView {
        name,
        role,
        match_label,
        citations,
        works,
        topics,
        image_src,
        offline_src,
        animation_style,
        ..
    } = card;
    let (src, set_src) = signal(image_src);
    let alt = name.clone();
    // swap to the offline image once; if that fails too, leave it broken
    let on_error = move |_| {
        if src.get_untracked() != offline_src {
            set_src.set(offline_src.clone());
        }
    };

    view! {
        <div class="faculty-card" style=animation_style>
            <div class="card-image-container">
                <img src=move || src.get() alt=alt on:error=on_error />
            </div>
            <div class="card-content">
                <h2 class="faculty-name">{name}</h2>
                <span class="faculty-role">{role}</span>
                <div class="stat-row">
                    <span>"MATCH ACCURACY"</span>
                    <span>{match_label}</span>
                </div>
                <div class="stat-row">
                    <span>"CITATIONS"</span>
                    <span>{citations}</span>
                </div>
                <div class="stat-row">
                    <span>"WORKS"</span>
                    <span>{works}</span>
                </div>
                <div class="topics">"TOPICS: " {topics}</div>
            </div>
        </div>
    }
}
