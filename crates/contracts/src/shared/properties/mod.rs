pub mod filter;
pub mod preset;
pub mod property;
pub mod registry;
pub mod render;
pub mod value_type;

pub use filter::*;
pub use preset::*;
pub use property::*;
pub use registry::*;
pub use render::*;
pub use value_type::*;
