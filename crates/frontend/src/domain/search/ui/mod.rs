pub mod advanced;
pub mod quick;
