//! DTOs exposed by the JSON API endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the `/api/v1/...` list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Status filter, `all` or one of the domain's statuses.
    pub status: Option<String>,
    /// Optional free-form search string.
    pub query: Option<String>,
}

/// Result payload returned by the list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<E> {
    /// Number of entities matching the filter.
    pub total: usize,
    pub items: Vec<E>,
}

impl<E> From<Vec<E>> for ListResponse<E> {
    fn from(items: Vec<E>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}
