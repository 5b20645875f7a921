use serde::{Deserialize, Serialize};

/// Result of one GraphQL call
pub type QueryResult<T> = Result<T, QueryError>;

/// Error raised by a GraphQL call or by the code consuming its payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl QueryError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Transport failed before a response arrived
    pub fn network(message: impl Into<String>) -> Self {
        Self::new("NETWORK_ERROR", message)
    }

    /// The server answered with GraphQL-level errors
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::new("GRAPHQL_ERROR", message)
    }

    /// The response body did not match the expected shape
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new("DECODE_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryError {}

impl From<anyhow::Error> for QueryError {
    fn from(err: anyhow::Error) -> Self {
        QueryError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_details() {
        let err = QueryError::network("fetch failed").with_details("connection refused");
        assert_eq!(err.to_string(), "[NETWORK_ERROR] fetch failed: connection refused");

        let err = QueryError::graphql("dog not found");
        assert_eq!(err.to_string(), "[GRAPHQL_ERROR] dog not found");
    }
}
