use leptos::prelude::*;

/// Select with a leading placeholder entry
///
/// The placeholder renders as a selectable first option with an empty value,
/// so picking it again clears the selection and the handler receives the
/// empty string.
#[component]
pub fn Select(
    /// Placeholder shown while nothing is selected
    #[prop(into)]
    placeholder: Signal<String>,
    /// Current value, empty string when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the empty string on clear
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            class=move || format!("form__select {}", additional_class())
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <option value="" selected=move || value.get().is_empty()>
                {placeholder}
            </option>
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
