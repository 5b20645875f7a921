pub mod graphql;
pub mod properties;
