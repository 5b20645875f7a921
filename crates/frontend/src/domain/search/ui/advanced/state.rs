use contracts::shared::properties::{OutputSelection, PropertyRegistry, SearchFilters};
use leptos::prelude::*;

/// Reactive state of the advanced search page
#[derive(Clone, Copy)]
pub struct AdvancedSearchState {
    /// Filter entries, keyed by property name
    pub filters: RwSignal<SearchFilters>,
    /// Output selection with the active preset marker
    pub outputs: RwSignal<OutputSelection>,
}

pub fn create_state(registry: &PropertyRegistry) -> AdvancedSearchState {
    AdvancedSearchState {
        filters: RwSignal::new(SearchFilters::new()),
        outputs: RwSignal::new(OutputSelection::for_registry(registry)),
    }
}
