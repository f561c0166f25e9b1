//! Domain aggregates shown on the back-office list screens.

use std::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::filter::{ListFilter, StatusFilter};
use crate::domain::types::{ListStatus, TypeConstraintError};

pub mod case;
pub mod case_file;
pub mod chat;
pub mod client;
pub mod consultation;
pub mod filter;
pub mod recording;
pub mod types;

/// A row of one of the list domains.
///
/// Every entity is keyed by an immutable identifier, carries exactly one
/// status from a closed enumeration and accepts a closed set of single-field
/// changes.
pub trait Entity: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static {
    type Id: Clone + Debug + Display + Eq + Send + Sync + 'static;
    type Status: ListStatus + Serialize;
    type Change: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Singular noun used in logs and notifications.
    const KIND: &'static str;
    /// Path of the list screen; detail views live below it.
    const ROUTE: &'static str;

    /// Validates an identifier received from a path segment or form.
    fn parse_id(raw: &str) -> Result<Self::Id, TypeConstraintError>;

    fn id(&self) -> &Self::Id;

    fn status(&self) -> Self::Status;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Status filter applied when the URL does not carry one.
    fn default_status_filter() -> StatusFilter<Self::Status> {
        StatusFilter::All
    }

    /// Writes exactly the field named by `change`.
    fn apply_change(&mut self, change: &Self::Change);

    /// Parses a `(field, value)` pair submitted by a form.
    fn parse_change(field: &str, value: &str) -> Result<Self::Change, TypeConstraintError>;

    /// Returns `true` when the entity passes both halves of `filter`.
    fn matches(&self, filter: &ListFilter<Self::Status>) -> bool {
        filter.status.accepts(self.status()) && filter.matches_text(self.search_fields())
    }
}
