use leptos::prelude::*;

/// Checkbox list over a fixed option set, multiple choice
///
/// The handler receives the complete new selection after every change.
#[component]
pub fn CheckboxGroup(
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Currently picked values
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    /// Additional CSS classes for the group wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__checkbox-group {}", additional_class())>
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_checked = val.clone();
                    let is_checked = move || selected.get().contains(&val_checked);
                    view! {
                        <div class="form__checkbox-wrapper">
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                checked=is_checked
                                on:change=move |ev| {
                                    if let Some(handler) = on_change {
                                        let mut picked = selected.get();
                                        if event_target_checked(&ev) {
                                            if !picked.contains(&val) {
                                                picked.push(val.clone());
                                            }
                                        } else {
                                            picked.retain(|v| v != &val);
                                        }
                                        handler.run(picked);
                                    }
                                }
                            />
                            <label class="form__checkbox-label">{label}</label>
                        </div>
                    }
                }
            />
        </div>
    }
}
