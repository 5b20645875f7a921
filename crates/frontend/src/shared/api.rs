//! GraphQL transport for the pedigree backend
//!
//! Resolves the endpoint from the window location and runs queries through
//! one shared helper so every caller gets the same error mapping.

use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse, QueryError, QueryResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the GraphQL endpoint URL
///
/// Constructs the endpoint from the current window location, using port 3000
/// for the backend server.
///
/// # Returns
/// - Endpoint URL like "http://localhost:3000/graphql"
/// - The localhost development endpoint if window is not available
pub fn graphql_endpoint() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "http://localhost:3000/graphql".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/graphql", protocol, hostname)
}

/// Execute one GraphQL query and decode the `data` payload
///
/// # Arguments
/// * `query` - The GraphQL document to send
/// * `variables` - Serialized as the `variables` object of the request
pub async fn execute<T, V>(query: &str, variables: V) -> QueryResult<T>
where
    T: DeserializeOwned,
    V: Serialize,
{
    let body = GraphQlRequest { query, variables };
    let response = Request::post(&graphql_endpoint())
        .json(&body)
        .map_err(|e| QueryError::internal(e.to_string()))?
        .send()
        .await
        .map_err(|e| QueryError::network(e.to_string()))?;

    if !response.ok() {
        return Err(QueryError::network(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let envelope: GraphQlResponse<T> = response
        .json()
        .await
        .map_err(|e| QueryError::decode(e.to_string()))?;
    envelope.into_result()
}
