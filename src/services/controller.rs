//! View-state controller shared by every list screen.
//!
//! A [`ListController`] owns the current page of rows, the active filter, the
//! loading flag and a queue of notifications for the user. It keeps the rows
//! consistent with the URL and with the last confirmed mutation:
//!
//! * rows are only ever replaced wholesale by a read, or patched at one field of
//!   one entity after the data source confirmed a write;
//! * every read carries a generation number and completions from superseded
//!   reads are dropped;
//! * failures never escape as panics, they become error notifications and
//!   leave the previous rows in place.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::Entity;
use crate::domain::client::{Client, ClientChange};
use crate::domain::filter::{ListFilter, StatusFilter, normalize_query};
use crate::domain::types::ClientId;
use crate::list_url::{ListUrl, QUERY_PARAM, STATUS_PARAM};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{EntityReader, EntityWriter};
use crate::services::notices::ListNotices;
use crate::services::notification::Notification;
use crate::services::{ServiceError, ServiceResult};

/// Upper bound applied to every data-source call unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of completing a read against the controller state.
#[derive(Debug)]
pub enum ReadOutcome {
    /// Rows were replaced; carries the new row count.
    Applied(usize),
    /// A newer read was issued in the meantime; nothing changed.
    Stale,
    /// The read failed; rows were kept and an error notification queued.
    Failed(ServiceError),
}

impl ReadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReadOutcome::Applied(_))
    }
}

/// A read that has been issued but not yet awaited.
///
/// It holds its own handle to the data source so several reads can be in
/// flight while the controller stays available.
pub struct PendingRead<E: Entity, R> {
    generation: u64,
    filter: ListFilter<E::Status>,
    source: Arc<R>,
    timeout: Duration,
}

impl<E, R> PendingRead<E, R>
where
    E: Entity,
    R: EntityReader<E>,
{
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filter(&self) -> &ListFilter<E::Status> {
        &self.filter
    }

    pub async fn run(self) -> CompletedRead<E> {
        let read = self.source.read_filtered(&self.filter);
        let result = bounded(self.timeout, read).await;
        CompletedRead {
            generation: self.generation,
            result,
        }
    }
}

/// Outcome of a [`PendingRead`] waiting to be applied.
#[derive(Debug)]
pub struct CompletedRead<E> {
    generation: u64,
    result: RepositoryResult<Vec<E>>,
}

impl<E> CompletedRead<E> {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Awaits `call`, mapping expiry of `timeout` to [`RepositoryError::Timeout`].
pub(crate) async fn bounded<T, F>(timeout: Duration, call: F) -> RepositoryResult<T>
where
    F: Future<Output = RepositoryResult<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(RepositoryError::Timeout(timeout)),
    }
}

pub struct ListController<E: Entity, R> {
    source: Arc<R>,
    rows: Vec<E>,
    filter: ListFilter<E::Status>,
    loading: bool,
    generation: u64,
    timeout: Duration,
    notifications: Vec<Notification>,
}

impl<E, R> ListController<E, R>
where
    E: ListNotices,
    R: EntityReader<E> + EntityWriter<E>,
{
    /// Creates a controller with no rows and the domain's default filter.
    pub fn new(source: Arc<R>) -> Self {
        Self {
            source,
            rows: Vec::new(),
            filter: ListFilter::new(E::default_status_filter()),
            loading: false,
            generation: 0,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            notifications: Vec::new(),
        }
    }

    /// Seeds the rows rendered before the first hydration.
    #[must_use]
    pub fn with_rows(mut self, rows: Vec<E>) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn row(&self, id: &E::Id) -> Option<&E> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn filter(&self) -> &ListFilter<E::Status> {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the most recently issued read.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains the queued notifications for delivery.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Derives the filter encoded in `url`.
    ///
    /// A missing or unrecognized `status` falls back to the domain default;
    /// a blank `query` is treated as absent.
    pub fn filter_from_url(url: &ListUrl) -> ListFilter<E::Status> {
        let status = match url.get(STATUS_PARAM) {
            None => E::default_status_filter(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("Ignoring {} status filter from URL: {err}", E::KIND);
                E::default_status_filter()
            }),
        };
        let query = url.get(QUERY_PARAM).unwrap_or_default();
        ListFilter::new(status).query(query)
    }

    /// Rewrites `url` for a submitted search; a blank query drops the parameter.
    pub fn search_url(url: &ListUrl, query: &str) -> ListUrl {
        let mut next = url.clone();
        match normalize_query(query) {
            Some(query) => next.set(QUERY_PARAM, query),
            None => next.remove(QUERY_PARAM),
        }
        next
    }

    /// Rewrites `url` for a new status filter.
    ///
    /// Only the "all" sentinel of a domain that defaults to "all" drops the
    /// parameter. Every other selection is written explicitly, including the
    /// default of domains that do not default to "all".
    pub fn status_url(url: &ListUrl, status: StatusFilter<E::Status>) -> ListUrl {
        let mut next = url.clone();
        if status == StatusFilter::All && E::default_status_filter() == StatusFilter::All {
            next.remove(STATUS_PARAM);
        } else {
            next.set(STATUS_PARAM, status.as_str());
        }
        next
    }

    /// Path of the detail view for `id`.
    pub fn detail_path(id: &E::Id) -> String {
        format!("{}/{}", E::ROUTE, id)
    }

    /// Adopts the filter encoded in `url` and reloads the rows.
    pub async fn hydrate(&mut self, url: &ListUrl) -> ReadOutcome {
        self.filter = Self::filter_from_url(url);
        self.refresh().await
    }

    /// Applies a submitted search and returns the URL to navigate to.
    pub async fn submit_search(&mut self, url: &ListUrl, query: &str) -> ListUrl {
        let next = Self::search_url(url, query);
        self.hydrate(&next).await;
        next
    }

    /// Applies a status filter selection and returns the URL to navigate to.
    pub async fn change_status_filter(
        &mut self,
        url: &ListUrl,
        status: StatusFilter<E::Status>,
    ) -> ListUrl {
        let next = Self::status_url(url, status);
        self.hydrate(&next).await;
        next
    }

    /// Reloads the rows for the active filter.
    pub async fn refresh(&mut self) -> ReadOutcome {
        let pending = self.begin_read();
        let completed = pending.run().await;
        self.complete_read(completed)
    }

    /// Issues a read for the active filter, superseding any read in flight.
    pub fn begin_read(&mut self) -> PendingRead<E, R> {
        self.generation += 1;
        self.loading = true;
        log::debug!(
            "Reading {} list (generation {}, status {})",
            E::KIND,
            self.generation,
            self.filter.status
        );

        PendingRead {
            generation: self.generation,
            filter: self.filter.clone(),
            source: Arc::clone(&self.source),
            timeout: self.timeout,
        }
    }

    /// Applies a finished read unless a newer one has been issued since.
    pub fn complete_read(&mut self, completed: CompletedRead<E>) -> ReadOutcome {
        if completed.generation != self.generation {
            log::debug!(
                "Discarding stale {} read (generation {}, latest {})",
                E::KIND,
                completed.generation,
                self.generation
            );
            return ReadOutcome::Stale;
        }

        self.loading = false;

        match completed.result {
            Ok(rows) => {
                let count = rows.len();
                self.rows = rows;
                ReadOutcome::Applied(count)
            }
            Err(source) => {
                log::error!("Failed to load {}: {source}", E::PLURAL);
                self.notifications.push(E::load_failed_notice());
                ReadOutcome::Failed(ServiceError::ReadFailure {
                    kind: E::KIND,
                    source,
                })
            }
        }
    }

    /// Writes a single-field change and reflects it locally once confirmed.
    ///
    /// On failure the rows are left exactly as they were. An id that is not
    /// among the local rows is still sent to the data source but patches
    /// nothing locally.
    pub async fn apply_mutation(&mut self, id: &E::Id, change: E::Change) -> ServiceResult<E> {
        let write = self.source.update_field(id, change.clone());
        let result = bounded(self.timeout, write).await;

        match result {
            Ok(updated) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
                    row.apply_change(&change);
                }
                log::info!("Updated {} {id}: {change:?}", E::KIND);
                self.notifications.push(updated.updated_notice(&change));
                Ok(updated)
            }
            Err(RepositoryError::NotFound) => Err(self.missing(id)),
            Err(source) => {
                log::error!("Failed to update {} {id}: {source}", E::KIND);
                self.notifications.push(E::update_failed_notice(&change));
                Err(ServiceError::WriteFailure {
                    kind: E::KIND,
                    id: id.to_string(),
                    source,
                })
            }
        }
    }

    fn missing(&mut self, id: &E::Id) -> ServiceError {
        log::warn!("{} {id} not found", E::KIND);
        self.notifications.push(E::not_found_notice(id));
        ServiceError::NotFound {
            kind: E::KIND,
            id: id.to_string(),
        }
    }
}

impl<R> ListController<Client, R>
where
    R: EntityReader<Client> + EntityWriter<Client>,
{
    /// Flips the favorite flag of a client held in the current rows.
    pub async fn toggle_favorite(&mut self, id: &ClientId) -> ServiceResult<Client> {
        match self.row(id).map(|client| client.is_favorite) {
            Some(current) => {
                let change = ClientChange::Favorite(!current);
                self.apply_mutation(id, change).await
            }
            None => Err(self.missing(id)),
        }
    }

    /// Flips the blocked flag of a client held in the current rows.
    pub async fn toggle_blocked(&mut self, id: &ClientId) -> ServiceResult<Client> {
        match self.row(id).map(|client| client.is_blocked) {
            Some(current) => {
                let change = ClientChange::Blocked(!current);
                self.apply_mutation(id, change).await
            }
            None => Err(self.missing(id)),
        }
    }
}
