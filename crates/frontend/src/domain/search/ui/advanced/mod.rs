//! Advanced search UI module
//!
//! - state.rs: filter and output selection signals
//! - view.rs: Leptos components of the page

mod state;
mod view;

pub use view::AdvancedSearch;
