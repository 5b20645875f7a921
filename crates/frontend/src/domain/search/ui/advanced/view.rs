use contracts::shared::graphql::search_selection_fragment;
use contracts::shared::properties::{
    Comparator, FilterControls, FilterValue, Preset, Property, ValueWidget, BOOLEAN_OPTIONS,
    BOOLEAN_TESTED_OPTIONS,
};
use leptos::prelude::*;

use crate::app::use_properties;
use crate::shared::components::ui::{CheckboxGroup, Input, Select};

use super::state::{create_state, AdvancedSearchState};

/// Advanced search page
///
/// Renders one filter row per catalog property, grouped by section, followed
/// by the output selection with its presets. The section structure is fixed
/// after bootstrap, only the row state is reactive.
#[component]
pub fn AdvancedSearch() -> impl IntoView {
    let properties = use_properties();
    let registry = properties.registry();
    let state = create_state(&registry);
    let sections = registry.grouped_by_section();
    let registry = StoredValue::new(registry);

    let filter_sections = sections
        .iter()
        .cloned()
        .map(|(section, section_properties)| {
            view! {
                <h2>{section}</h2>
                <div class="advanced-search-filter-section">
                    {section_properties
                        .into_iter()
                        .map(|property| view! { <FilterRow property=property state=state /> })
                        .collect_view()}
                </div>
            }
        })
        .collect_view();

    let output_sections = sections
        .into_iter()
        .map(|(section, section_properties)| {
            view! {
                <h3>{section}</h3>
                <div class="advanced-search-output-section">
                    {section_properties
                        .into_iter()
                        .map(|property| view! { <OutputButton property=property state=state /> })
                        .collect_view()}
                </div>
            }
        })
        .collect_view();

    // Hand the assembled request over to the dispatch boundary. The search
    // backend consumes the field list and the filter map as-is.
    let on_search = move |_| {
        let selected = state.outputs.read().selected();
        let fields = registry
            .with_value(|r| search_selection_fragment(r, selected.iter().map(String::as_str)));
        match serde_json::to_string(&state.filters.get()) {
            Ok(filters) => {
                log::info!("search requested: fields [{}] filters {}", fields, filters)
            }
            Err(err) => log::error!("search filters failed to serialize: {}", err),
        }
    };

    view! {
        <div class="advanced-search-container">
            <h1>"Filter"</h1>
            <div class="advanced-search-filter-container">{filter_sections}</div>
            <h1>"Ausgabe"</h1>
            <div class="advanced-search-preset-container">
                {Preset::all()
                    .iter()
                    .map(|preset| view! { <PresetButton preset=preset state=state /> })
                    .collect_view()}
            </div>
            <br />
            <div class="advanced-search-output-container">{output_sections}</div>
            <div class="advanced-search-submit" on:click=on_search>
                "Suchen"
            </div>
        </div>
    }
}

/// One row of the filter list: label, comparator select where the kind takes
/// one, the value widget, and the generation reach once the filter is active
#[component]
fn FilterRow(property: Property, state: AdvancedSearchState) -> impl IntoView {
    let filters = state.filters;
    let value_type = property.value_type();
    let controls = FilterControls::for_value_type(value_type);
    let display_name = property.info.display_name.clone();
    let description = property.info.description.clone();

    let value_options: Vec<(String, String)> = match controls.widget {
        ValueWidget::OptionSelect | ValueWidget::OptionChecklist => property
            .info
            .options()
            .iter()
            .map(|option| (option.clone(), option.clone()))
            .collect(),
        ValueWidget::BooleanSelect => BOOLEAN_OPTIONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect(),
        ValueWidget::BooleanTestedSelect => BOOLEAN_TESTED_OPTIONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect(),
        _ => Vec::new(),
    };
    let value_options = StoredValue::new(value_options);
    let placeholder = StoredValue::new(display_name.clone());
    let name = StoredValue::new(property.name().to_string());

    let is_active = Signal::derive(move || name.with_value(|n| filters.read().is_active(n)));
    let comparator_value = Signal::derive(move || {
        name.with_value(|n| {
            filters
                .read()
                .comparator(n)
                .map(|c| c.as_str().to_string())
                .unwrap_or_default()
        })
    });
    let single_value = Signal::derive(move || {
        name.with_value(|n| {
            filters
                .read()
                .get(n)
                .and_then(|entry| entry.value.as_ref())
                .map(|value| match value {
                    FilterValue::Single(text) => text.clone(),
                    FilterValue::Multiple(_) => String::new(),
                })
                .unwrap_or_default()
        })
    });
    let multi_value = Signal::derive(move || {
        name.with_value(|n| {
            filters
                .read()
                .get(n)
                .and_then(|entry| entry.value.as_ref())
                .map(|value| match value {
                    FilterValue::Multiple(picked) => picked.clone(),
                    FilterValue::Single(_) => Vec::new(),
                })
                .unwrap_or_default()
        })
    });
    let second_value = Signal::derive(move || {
        name.with_value(|n| {
            filters
                .read()
                .get(n)
                .and_then(|entry| entry.second_value.clone())
                .unwrap_or_default()
        })
    });
    let generations = Signal::derive(move || {
        name.with_value(|n| {
            filters
                .read()
                .get(n)
                .map(|entry| entry.generations)
                .unwrap_or(1)
                .to_string()
        })
    });

    let on_comparator = Callback::new(move |picked: String| {
        filters.update(|f| name.with_value(|n| f.set_comparator(n, Comparator::parse(&picked))));
    });
    let on_value = Callback::new(move |text: String| {
        filters.update(|f| {
            name.with_value(|n| f.set_value(n, Some(FilterValue::Single(text))))
        });
    });
    let on_multi = Callback::new(move |picked: Vec<String>| {
        filters.update(|f| {
            name.with_value(|n| f.set_value(n, Some(FilterValue::Multiple(picked))))
        });
    });
    let on_second = Callback::new(move |text: String| {
        filters.update(|f| name.with_value(|n| f.set_second_value(n, Some(text))));
    });
    let on_generations = Callback::new(move |text: String| {
        if let Ok(generations) = text.parse::<u32>() {
            filters.update(|f| name.with_value(|n| f.set_generations(n, generations)));
        }
    });

    // Comparator-bearing kinds keep their value widget hidden until an
    // operator is picked
    let show_value = move || !controls.has_comparators() || !comparator_value.get().is_empty();
    let show_second = move || comparator_value.get() == "between";

    let value_widget = move |value: Signal<String>, on_change: Callback<String>| -> AnyView {
        match controls.widget {
            ValueWidget::Text => view! {
                <Input
                    class="advanced-search-filter-value-component advanced-search-filter-input"
                    value=value
                    on_input=on_change
                />
            }
            .into_any(),
            ValueWidget::Number => view! {
                <Input
                    class="advanced-search-filter-value-component advanced-search-filter-input"
                    input_type="number"
                    value=value
                    on_input=on_change
                />
            }
            .into_any(),
            ValueWidget::Date => view! {
                <Input
                    class="advanced-search-filter-value-component advanced-search-filter-input"
                    input_type="date"
                    value=value
                    on_input=on_change
                />
            }
            .into_any(),
            ValueWidget::OptionSelect
            | ValueWidget::BooleanSelect
            | ValueWidget::BooleanTestedSelect => view! {
                <Select
                    class="advanced-search-filter-value-component advanced-search-filter-input"
                    placeholder=placeholder.get_value()
                    value=value
                    options=value_options.get_value()
                    on_change=on_change
                />
            }
            .into_any(),
            ValueWidget::OptionChecklist => view! {
                <CheckboxGroup
                    class="advanced-search-filter-value-component advanced-search-filter-input"
                    options=value_options.get_value()
                    selected=multi_value
                    on_change=on_multi
                />
            }
            .into_any(),
        }
    };

    view! {
        <div class=move || {
            if is_active.get() {
                "advanced-search-filter advanced-search-filter-active"
            } else {
                "advanced-search-filter"
            }
        }>
            <div class="advanced-search-filter-label" title=description>
                {display_name}
            </div>
            <div class="advanced-search-filter-value">
                {controls.has_comparators().then(|| {
                    let comparator_options: Vec<(String, String)> = controls
                        .comparators
                        .iter()
                        .map(|c| (c.as_str().to_string(), c.label(value_type).to_string()))
                        .collect();
                    view! {
                        <Select
                            class="advanced-search-filter-value-component advanced-search-filter-input"
                            placeholder={String::from("Filter")}
                            value=comparator_value
                            options=comparator_options
                            on_change=on_comparator
                        />
                    }
                })}
                {move || show_value().then(|| value_widget(single_value, on_value))}
                {move || {
                    show_second()
                        .then(|| {
                            view! {
                                <span class="advanced-search-filter-value-component">"und"</span>
                                {value_widget(second_value, on_second)}
                            }
                        })
                }}
                {move || {
                    is_active
                        .get()
                        .then(|| {
                            view! {
                                <span>"in"</span>
                                <Input
                                    class="advanced-search-filter-value-component advanced-search-filter-input advanced-search-filter-generations"
                                    input_type="number"
                                    value=generations
                                    on_input=on_generations
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn PresetButton(preset: &'static Preset, state: AdvancedSearchState) -> impl IntoView {
    let outputs = state.outputs;
    let class = move || {
        if outputs.read().active_preset() == Some(preset.id) {
            "advanced-search-output-button advanced-search-output-button-preset advanced-search-output-button-preset-active"
        } else {
            "advanced-search-output-button advanced-search-output-button-preset"
        }
    };

    view! {
        <div class=class on:click=move |_| outputs.update(|o| o.apply_preset(preset))>
            {preset.label}
        </div>
    }
}

#[component]
fn OutputButton(property: Property, state: AdvancedSearchState) -> impl IntoView {
    let outputs = state.outputs;
    let name = StoredValue::new(property.name().to_string());
    let class = move || {
        if name.with_value(|n| outputs.read().is_selected(n)) {
            "advanced-search-output-button advanced-search-output-button-property advanced-search-output-button-property-active"
        } else {
            "advanced-search-output-button advanced-search-output-button-property"
        }
    };

    view! {
        <div
            class=class
            title=property.info.description.clone()
            on:click=move |_| outputs.update(|o| name.with_value(|n| o.toggle(n)))
        >
            {property.info.display_name.clone()}
        </div>
    }
}
