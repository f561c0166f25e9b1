//! Data-access boundary between list controllers and the remote store.
//!
//! Controllers only see the [`EntityReader`] / [`EntityWriter`] capability
//! pair. Recordings and case files have their own reader/writer traits.
//! [`FixtureRepository`] is the in-memory stand-in used by the server; tests
//! may substitute the mockall doubles from [`mock`].

use async_trait::async_trait;

use crate::domain::Entity;
use crate::domain::case_file::CaseFile;
use crate::domain::filter::ListFilter;
use crate::domain::recording::VoiceRecording;
use crate::domain::types::{CaseId, FileId, RecordingId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixtures;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod seed;

pub use fixtures::{FixtureRepository, FixtureTable};

#[async_trait]
pub trait EntityReader<E: Entity>: Send + Sync {
    /// Returns the entities matching `filter` in store order.
    async fn read_filtered(&self, filter: &ListFilter<E::Status>) -> RepositoryResult<Vec<E>>;
}

#[async_trait]
pub trait EntityWriter<E: Entity>: Send + Sync {
    /// Applies a single-field change and returns the full updated entity.
    async fn update_field(&self, id: &E::Id, change: E::Change) -> RepositoryResult<E>;
}

#[async_trait]
pub trait RecordingReader: Send + Sync {
    async fn list_recordings(&self) -> RepositoryResult<Vec<VoiceRecording>>;
}

#[async_trait]
pub trait RecordingWriter: Send + Sync {
    /// Fails with `NotFound` when no recording has `id`.
    async fn delete_recording(&self, id: &RecordingId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait CaseFileReader: Send + Sync {
    /// Files attached to `case_id` in store order.
    async fn list_case_files(&self, case_id: &CaseId) -> RepositoryResult<Vec<CaseFile>>;
}

#[async_trait]
pub trait CaseFileWriter: Send + Sync {
    async fn delete_file(&self, id: &FileId) -> RepositoryResult<()>;
}
