//! Quick search UI module
//!
//! - model.rs: query execution
//! - view.rs: search box with the result dropdown

mod model;
mod view;

pub use view::QuickSearch;
