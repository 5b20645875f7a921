pub mod dog;
pub mod search;
