//! Dog details UI module
//!
//! - model.rs: query execution and row preparation
//! - view.rs: Leptos component

mod model;
mod view;

pub use view::DogDetails;
