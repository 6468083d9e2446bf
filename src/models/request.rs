use serde::{Deserialize, Serialize};

/// Request body for the streaming ask endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    /// The user's question, already trimmed
    pub query: String,
}

impl QueryRequest {
    /// Create a new QueryRequest
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_serializes_to_query_field() {
        let request = QueryRequest::new("What is the transfer limit?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "query": "What is the transfer limit?" })
        );
    }
}
