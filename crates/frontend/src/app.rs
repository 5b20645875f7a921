use contracts::shared::graphql::{QueryResult, PROPERTIES_QUERY};
use contracts::shared::properties::{PropertiesData, PropertyInfo, PropertyRegistry};
use leptos::prelude::*;
use serde_json::json;

use crate::routes::AppRoutes;
use crate::shared::api;

/// Property catalog snapshot shared with the whole tree via context
///
/// Built once after bootstrap and never replaced, so every view reads the
/// same catalog for the lifetime of the page.
#[derive(Clone, Copy)]
pub struct PropertiesContext {
    registry: StoredValue<PropertyRegistry>,
}

impl PropertiesContext {
    pub fn new(registry: PropertyRegistry) -> Self {
        Self {
            registry: StoredValue::new(registry),
        }
    }

    /// Read the catalog without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&PropertyRegistry) -> R) -> R {
        self.registry.with_value(f)
    }

    /// Clone the catalog out of the context
    pub fn registry(&self) -> PropertyRegistry {
        self.registry.get_value()
    }
}

/// Get the property catalog from context
pub fn use_properties() -> PropertiesContext {
    use_context::<PropertiesContext>().expect("PropertiesContext not found")
}

async fn fetch_property_infos() -> QueryResult<Vec<PropertyInfo>> {
    let data: PropertiesData = api::execute(PROPERTIES_QUERY, json!({})).await?;
    Ok(data.properties)
}

/// Application root
///
/// Loads the property catalog before anything else renders. The rest of the
/// app assumes the catalog is in context, so routing only mounts once the
/// bootstrap query resolved.
#[component]
pub fn App() -> impl IntoView {
    let (registry, set_registry) = signal::<Option<PropertyRegistry>>(None);
    let (failed, set_failed) = signal(false);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_property_infos().await {
            Ok(rows) => {
                let loaded = PropertyRegistry::bootstrap(rows);
                log::debug!("property catalog ready: {} definitions", loaded.len());
                set_registry.set(Some(loaded));
            }
            Err(err) => {
                log::error!("property bootstrap failed: {}", err);
                set_failed.set(true);
            }
        }
    });

    view! {
        {move || match registry.get() {
            Some(registry) => view! { <ReadyApp registry=registry /> }.into_any(),
            None if failed.get() => {
                view! { <div class="app-error">"Fehler beim Laden der Eigenschaften"</div> }
                    .into_any()
            }
            None => view! { <div class="app-loading">"Laden..."</div> }.into_any(),
        }}
    }
}

#[component]
fn ReadyApp(registry: PropertyRegistry) -> impl IntoView {
    provide_context(PropertiesContext::new(registry));

    view! { <AppRoutes /> }
}
