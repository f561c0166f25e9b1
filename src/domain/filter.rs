//! Filter values narrowing a list read.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::types::{ListStatus, TypeConstraintError};

/// Sentinel used in URLs and forms for "every status".
pub const ALL_STATUSES: &str = "all";

/// Status half of a list filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: ListStatus> StatusFilter<S> {
    /// Returns `true` when `status` passes the filter.
    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl<S: ListStatus> Display for StatusFilter<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: ListStatus> FromStr for StatusFilter<S> {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL_STATUSES) {
            Ok(StatusFilter::All)
        } else {
            value.parse().map(StatusFilter::Only)
        }
    }
}

impl<S: ListStatus> Serialize for StatusFilter<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The `(status, query)` pair that narrows a read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "S: ListStatus"))]
pub struct ListFilter<S> {
    pub status: StatusFilter<S>,
    /// Trimmed free-text query; `None` matches everything.
    pub query: Option<String>,
}

impl<S: ListStatus> ListFilter<S> {
    pub fn new(status: StatusFilter<S>) -> Self {
        Self {
            status,
            query: None,
        }
    }

    /// Filter accepting every entity.
    pub fn all() -> Self {
        Self::new(StatusFilter::All)
    }

    /// Sets the free-text query; blank input clears it.
    pub fn query(mut self, query: impl AsRef<str>) -> Self {
        self.query = normalize_query(query.as_ref());
        self
    }

    /// Case-insensitive substring match of the query against `fields`.
    pub fn matches_text<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.query {
            None => true,
            Some(query) => {
                let needle = query.to_lowercase();
                fields
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Trims a free-text query, mapping blank input to `None`.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
