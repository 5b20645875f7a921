use leptos::prelude::*;

use crate::domain::search::ui::quick::QuickSearch;

/// Top bar: program name on the left, quick search next to it
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <div class="nav-bar-container">
            <div class="nav-bar-logo">"Zuchtprogramm"</div>
            <QuickSearch />
        </div>
    }
}
