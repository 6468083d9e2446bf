//! Data types exchanged with the answer service.

mod request;
mod search;

pub use request::QueryRequest;
pub use search::{SearchResult, SearchResultSet};
