use serde::{Deserialize, Serialize};

use super::error::{QueryError, QueryResult};

/// POST body of a GraphQL call
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Generic GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Collapse the envelope into one result. Any reported error wins over
    /// partial data.
    pub fn into_result(self) -> QueryResult<T> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(QueryError::graphql(joined));
        }
        self.data
            .ok_or_else(|| QueryError::graphql("response contained no data"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        answer: u32,
    }

    #[test]
    fn test_into_result_returns_data() {
        let response: GraphQlResponse<Payload> =
            serde_json::from_value(json!({"data": {"answer": 42}})).unwrap();
        assert_eq!(response.into_result().unwrap(), Payload { answer: 42 });
    }

    #[test]
    fn test_into_result_joins_error_messages() {
        let response: GraphQlResponse<Payload> = serde_json::from_value(json!({
            "data": null,
            "errors": [{"message": "boom"}, {"message": "bang"}]
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.code, "GRAPHQL_ERROR");
        assert_eq!(err.message, "boom; bang");
    }

    #[test]
    fn test_errors_win_over_partial_data() {
        let response: GraphQlResponse<Payload> = serde_json::from_value(json!({
            "data": {"answer": 1},
            "errors": [{"message": "partial failure"}]
        }))
        .unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let response: GraphQlResponse<Payload> = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_request_serializes_query_and_variables() {
        let request = GraphQlRequest {
            query: "query Q { x }",
            variables: json!({"id": "7"}),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "query Q { x }", "variables": {"id": "7"}})
        );
    }
}
