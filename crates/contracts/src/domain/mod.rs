pub mod data;
pub mod dog;
pub mod search;
