use leptos::prelude::*;

// (label, route) menu entries; entries without a route are not wired up yet
const TOP_ITEMS: &[(&str, Option<&str>)] = &[
    ("Erweiterte Suche", Some("/search")),
    ("Meine Hunde", None),
    ("Erfassen", None),
    ("Statistik", None),
];

const BOTTOM_ITEMS: &[(&str, Option<&str>)] = &[
    ("Abmelden", None),
    ("Account Einstellungen", None),
    ("Programm Einstellungen", None),
];

/// Left menu with the navigation entries on top and the account entries at
/// the bottom
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="side-bar-container">
            <div class="side-bar-section side-bar-section-top">
                {menu_section(TOP_ITEMS)}
            </div>
            <div class="side-bar-section side-bar-section-bottom">
                {menu_section(BOTTOM_ITEMS)}
            </div>
        </div>
    }
}

fn menu_section(items: &'static [(&'static str, Option<&'static str>)]) -> impl IntoView {
    items
        .iter()
        .map(|(label, route)| match route {
            Some(href) => view! {
                <a class="side-bar-element" href=*href>
                    {*label}
                </a>
            }
            .into_any(),
            None => view! { <div class="side-bar-element">{*label}</div> }.into_any(),
        })
        .collect_view()
}
