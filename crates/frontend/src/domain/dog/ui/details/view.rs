use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::use_properties;

use super::model::{self, PropertyRow};

/// Detail page of a single dog
///
/// Shows the dog's full name and one row per property the record carries.
/// The route parameter drives loading, so navigating between dogs reuses the
/// mounted component.
#[component]
pub fn DogDetails() -> impl IntoView {
    let properties = use_properties();
    let params = use_params_map();

    let is_loading = RwSignal::new(true);
    let has_error = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<PropertyRow>::new());

    // Reload whenever the dog id in the route changes
    Effect::new(move |_| {
        let dog_id = params.read().get("dog_id").unwrap_or_default();
        is_loading.set(true);
        has_error.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            let registry = properties.registry();
            let loaded = model::fetch_dog(&registry, &dog_id).await.map(|record| {
                let rows = model::property_rows(&registry, &record);
                (record.full_name().unwrap_or_default().to_string(), rows)
            });
            match loaded {
                Ok((dog_name, dog_rows)) => {
                    title.set(dog_name);
                    rows.set(dog_rows);
                    is_loading.set(false);
                }
                Err(err) => {
                    log::error!("failed to load dog {}: {}", dog_id, err);
                    has_error.set(true);
                    is_loading.set(false);
                }
            }
        });
    });

    view! {
        {move || {
            if is_loading.get() {
                view! { <div>"Loading"</div> }.into_any()
            } else if has_error.get() {
                view! { <div>"Error"</div> }.into_any()
            } else {
                view! {
                    <h1>{move || title.get()}</h1>
                    <div class="property-container">
                        <For
                            each=move || rows.get()
                            key=|row| row.name.clone()
                            children=|row| {
                                view! {
                                    <div class="property">
                                        <div class="property-key">
                                            <b>{row.label}</b>
                                        </div>
                                        <div class="property-value">{row.value}</div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }
        }}
    }
}
