pub mod navbar;
pub mod sidebar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use navbar::Navbar;
use sidebar::Sidebar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |  Sidebar  |       routed content         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="outer-container">
            // Top bar with logo and quick search
            <Navbar />

            <div class="main-container">
                // Left menu
                <Sidebar />

                // Routed page
                <div class="content-container">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
