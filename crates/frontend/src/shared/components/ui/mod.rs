pub mod checkbox_group;
pub mod input;
pub mod select;

pub use checkbox_group::CheckboxGroup;
pub use input::Input;
pub use select::Select;
