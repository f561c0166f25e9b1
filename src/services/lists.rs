use std::sync::Arc;
use std::time::Duration;

use crate::domain::filter::StatusFilter;
use crate::dto::api::ListQuery;
use crate::dto::list::{ListPageData, MutationOutcome, status_options};
use crate::list_url::{ListUrl, QUERY_PARAM, STATUS_PARAM};
use crate::repository::{EntityReader, EntityWriter};
use crate::services::controller::{ListController, ReadOutcome};
use crate::services::notices::ListNotices;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of `E` rows for the filter encoded in `url`.
///
/// Read failures do not fail the page: the rows stay empty and the error
/// notification is returned with the page.
pub async fn load_list_page<E, R>(
    source: Arc<R>,
    url: &ListUrl,
    timeout: Duration,
) -> ListPageData<E>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    let mut controller: ListController<E, R> = ListController::new(source).with_timeout(timeout);
    controller.hydrate(url).await;

    ListPageData {
        kind: E::KIND,
        url: url.to_string(),
        filter: controller.filter().clone(),
        status_options: status_options::<E>(),
        rows: controller.rows().to_vec(),
        alerts: Vec::new(),
        notifications: controller.take_notifications(),
    }
}

/// Computes the URL to navigate to after a search submission.
pub fn search_list<E, R>(url: &ListUrl, query: &str) -> ListUrl
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    ListController::<E, R>::search_url(url, query)
}

/// Computes the URL to navigate to after a status filter selection.
pub fn select_status<E, R>(url: &ListUrl, raw_status: &str) -> ServiceResult<ListUrl>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    let status: StatusFilter<E::Status> = raw_status.parse().map_err(|err| {
        log::error!("Invalid {} status filter: {err}", E::KIND);
        ServiceError::from(err)
    })?;

    Ok(ListController::<E, R>::status_url(url, status))
}

/// Parses and applies a single-field change to the entity at `raw_id`.
pub async fn update_entity<E, R>(
    source: Arc<R>,
    raw_id: &str,
    field: &str,
    value: &str,
    timeout: Duration,
) -> MutationOutcome<E>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    let parsed = E::parse_id(raw_id).and_then(|id| Ok((id, E::parse_change(field, value)?)));

    let (id, change) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            log::error!("Rejected {} update for {raw_id}: {err}", E::KIND);
            return MutationOutcome {
                updated: Err(ServiceError::from(err)),
                notifications: Vec::new(),
            };
        }
    };

    let mut controller: ListController<E, R> = ListController::new(source).with_timeout(timeout);
    let updated = controller.apply_mutation(&id, change).await;

    MutationOutcome {
        updated,
        notifications: controller.take_notifications(),
    }
}

/// Reads the `E` rows matching `params` for the JSON API.
///
/// Unlike the list pages, an unknown status is rejected instead of falling
/// back to the default.
pub async fn read_entities<E, R>(
    source: Arc<R>,
    params: ListQuery,
    timeout: Duration,
) -> ServiceResult<Vec<E>>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    let mut url = ListUrl::new(E::ROUTE);
    if let Some(status) = params.status {
        status.parse::<StatusFilter<E::Status>>()?;
        url.set(STATUS_PARAM, status);
    }
    if let Some(query) = params.query {
        url.set(QUERY_PARAM, query);
    }

    let mut controller: ListController<E, R> = ListController::new(source).with_timeout(timeout);
    match controller.hydrate(&url).await {
        ReadOutcome::Failed(err) => Err(err),
        _ => Ok(controller.rows().to_vec()),
    }
}

/// Applies a typed change coming from the JSON API.
pub async fn write_entity<E, R>(
    source: Arc<R>,
    raw_id: &str,
    change: E::Change,
    timeout: Duration,
) -> ServiceResult<E>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    let id = E::parse_id(raw_id)?;
    let mut controller: ListController<E, R> = ListController::new(source).with_timeout(timeout);
    controller.apply_mutation(&id, change).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::Case;
    use crate::domain::client::Client;
    use crate::domain::types::{CaseStatus, ClientStatus};
    use crate::repository::FixtureRepository;
    use crate::repository::errors::RepositoryError;

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn repo() -> Arc<FixtureRepository> {
        Arc::new(FixtureRepository::seeded(Duration::ZERO))
    }

    #[tokio::test]
    async fn page_carries_filter_and_options() {
        let url = ListUrl::parse("/cases", "status=pending");
        let page: ListPageData<Case> = load_list_page(repo(), &url, TIMEOUT).await;

        assert_eq!(page.kind, "case");
        assert_eq!(page.url, "/cases?status=pending");
        assert_eq!(page.filter.status, StatusFilter::Only(CaseStatus::Pending));
        assert_eq!(
            page.status_options,
            vec!["all", "pending", "approved", "rejected"]
        );
        assert!(page.rows.iter().all(|c| c.status == CaseStatus::Pending));
        assert!(page.notifications.is_empty());
    }

    #[tokio::test]
    async fn failed_page_load_reports_notification() {
        let repo = repo();
        repo.cases()
            .fail_next_read(RepositoryError::Transient("offline".into()))
            .unwrap();

        let url = ListUrl::new("/cases");
        let page: ListPageData<Case> = load_list_page(repo, &url, TIMEOUT).await;

        assert!(page.rows.is_empty());
        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.notifications[0].description, "Failed to load cases");
    }

    #[test]
    fn invalid_status_selection_is_rejected() {
        let url = ListUrl::new("/cases");
        let result = select_status::<Case, FixtureRepository>(&url, "archived");

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn client_all_selection_is_explicit() {
        let url = ListUrl::new("/clients");
        let next = select_status::<Client, FixtureRepository>(&url, "all").unwrap();

        assert_eq!(next.to_string(), "/clients?status=all");
    }

    #[tokio::test]
    async fn update_rejects_unknown_field() {
        let repo = repo();
        let outcome: MutationOutcome<Case> =
            update_entity(repo, "case-1", "title", "x", TIMEOUT).await;

        let err = outcome.updated.unwrap_err();
        assert!(matches!(err, ServiceError::TypeConstraint(_)));
        assert!(outcome.notifications.is_empty());
    }

    #[tokio::test]
    async fn update_applies_change_and_notifies() {
        let repo = repo();
        let (field, value) = ("status", "inactive");
        let outcome: MutationOutcome<Client> =
            update_entity(Arc::clone(&repo), "client-2", field, value, TIMEOUT).await;

        let updated = outcome.updated.unwrap();
        assert_eq!(updated.status, ClientStatus::Inactive);
        assert_eq!(outcome.notifications.len(), 1);
        assert!(!outcome.notifications[0].is_error());

        let stored = repo.clients().snapshot().unwrap();
        let client = stored.iter().find(|c| c.id.as_str() == "client-2").unwrap();
        assert_eq!(client.status, ClientStatus::Inactive);
    }

    #[tokio::test]
    async fn api_read_rejects_unknown_status() {
        let params = ListQuery {
            status: Some("closed".into()),
            query: None,
        };
        let result = read_entities::<Case, _>(repo(), params, TIMEOUT).await;

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }
}
