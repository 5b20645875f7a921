pub mod document;
pub mod error;
pub mod request;

pub use document::*;
pub use error::*;
pub use request::*;
