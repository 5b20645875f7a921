use contracts::domain::search::SearchHit;
use leptos::prelude::*;

use crate::routes::dog_path;

use super::model;

/// Search box in the navbar with a dropdown of ranked hits
///
/// Every keystroke dispatches a query. Requests are not cancelled, so each
/// one carries a sequence number and a response only lands when it belongs
/// to the latest dispatched request.
#[component]
pub fn QuickSearch() -> impl IntoView {
    let active = RwSignal::new(false);
    let results = RwSignal::new(Vec::<SearchHit>::new());
    let has_error = RwSignal::new(false);
    let latest_request = StoredValue::new(0u64);

    let run_search = move |text: String| {
        let sequence = latest_request.get_value() + 1;
        latest_request.set_value(sequence);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::fetch_hits(&text).await;
            if latest_request.get_value() != sequence {
                return;
            }
            match outcome {
                Ok(hits) => {
                    has_error.set(false);
                    results.set(hits);
                }
                Err(err) => {
                    log::error!("quick search failed: {}", err);
                    has_error.set(true);
                }
            }
        });
    };

    view! {
        <Show when=move || active.get()>
            <div class="search-background" on:click=move |_| active.set(false)></div>
        </Show>
        <div class="search-container">
            <input
                class="search-input"
                on:input=move |ev| run_search(event_target_value(&ev))
                on:click=move |_| active.set(true)
            />
            <Show when=move || active.get()>
                <Show
                    when=move || !has_error.get()
                    fallback=|| view! { <div class="search-error">"Error"</div> }
                >
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|hit| {
                                view! {
                                    <a
                                        class="search-result"
                                        href=dog_path(&hit.id)
                                        on:click=move |_| active.set(false)
                                    >
                                        <div class="search-result-name">{hit.name.clone()}</div>
                                        <div class="search-result-type">
                                            {hit.node_type.label()}
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </Show>
        </div>
    }
}
