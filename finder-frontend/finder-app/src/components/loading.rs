use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="lds-ellipsis" role="status" aria-label="Searching">
            <div></div><div></div><div></div><div></div>
        </div>
    }
}
