use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::dog::ui::details::DogDetails;
use crate::domain::search::ui::advanced::AdvancedSearch;
use crate::layout::Shell;

/// Route table of the application
///
/// Every page renders inside the [`Shell`] layout. The root path shows the
/// shell with empty content.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="not-found">"Seite nicht gefunden"</div> }>
                <ParentRoute path=path!("/") view=Shell>
                    <Route path=path!("dog/:dog_id") view=DogDetails />
                    <Route path=path!("search") view=AdvancedSearch />
                    <Route path=path!("") view=EmptyContent />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn EmptyContent() -> impl IntoView {
    view! { <></> }
}

/// Path of a dog's detail page
pub fn dog_path(dog_id: &str) -> String {
    format!("/dog/{}", urlencoding::encode(dog_id))
}
