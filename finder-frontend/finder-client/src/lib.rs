use anyhow::anyhow;
use finder_app::{config::SearchConfig, App};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Pages can override the defaults with `<script id="finder-config" type="application/json">`.
const CONFIG_ELEMENT_ID: &str = "finder-config";

fn config_block() -> anyhow::Result<Option<String>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document to read #{CONFIG_ELEMENT_ID} from"))?;
    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .map(|element| element.text_content().unwrap_or_default()))
}

/// `?q=` in the page URL starts a search as soon as the widget mounts.
fn initial_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get("q")
}

#[wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = SearchConfig::from_page_block(config_block()).unwrap_or_else(|e| {
        log::error!("reading #{CONFIG_ELEMENT_ID}: {e}, using defaults");
        SearchConfig::default()
    });
    let initial_query = initial_query();
    log::info!("csr mode - mounting, endpoint {}", config.endpoint);

    leptos::mount::mount_to_body(move || view! { <App config initial_query /> });
}
