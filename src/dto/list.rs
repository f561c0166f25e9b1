use serde::Serialize;

use crate::domain::Entity;
use crate::domain::filter::{ALL_STATUSES, ListFilter};
use crate::domain::types::ListStatus;
use crate::services::ServiceResult;
use crate::services::notification::Notification;

/// Flash-style alert rendered above a list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub level: &'static str,
}

/// Everything a list screen needs to render one page.
#[derive(Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ListPageData<E: Entity> {
    pub kind: &'static str,
    /// Canonical URL of the page, used as the target of form posts.
    pub url: String,
    pub filter: ListFilter<E::Status>,
    /// Selectable status values, starting with the "all" sentinel.
    pub status_options: Vec<&'static str>,
    pub rows: Vec<E>,
    pub alerts: Vec<Alert>,
    /// Notifications raised while loading the page.
    pub notifications: Vec<Notification>,
}

/// Selectable status filter values for `E`.
pub fn status_options<E: Entity>() -> Vec<&'static str> {
    std::iter::once(ALL_STATUSES)
        .chain(E::Status::ALL.iter().map(|status| status.as_str()))
        .collect()
}

/// Result of a mutation together with the notifications it produced.
#[derive(Debug)]
pub struct MutationOutcome<E> {
    pub updated: ServiceResult<E>,
    pub notifications: Vec<Notification>,
}
