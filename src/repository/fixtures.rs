//! In-memory stand-in for the practice's remote services.
//!
//! Each [`FixtureTable`] holds one domain's rows behind a mutex, sleeps for a
//! configurable latency before answering, and can be told to fail the next
//! read or write. Locks are never held across an `.await`.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Entity;
use crate::domain::case::Case;
use crate::domain::case_file::CaseFile;
use crate::domain::chat::ChatSummary;
use crate::domain::client::Client;
use crate::domain::consultation::VideoConsultation;
use crate::domain::filter::ListFilter;
use crate::domain::recording::VoiceRecording;
use crate::domain::types::{CaseId, FileId, RecordingId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CaseFileReader, CaseFileWriter, EntityReader, EntityWriter, RecordingReader, RecordingWriter,
    seed,
};

/// Rows of a single domain plus the faults queued against them.
#[derive(Debug)]
pub struct FixtureTable<E> {
    rows: Mutex<Vec<E>>,
    read_faults: Mutex<VecDeque<RepositoryError>>,
    write_faults: Mutex<VecDeque<RepositoryError>>,
    latency: Duration,
}

impl<E: Clone + Send> FixtureTable<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self {
            rows: Mutex::new(rows),
            read_faults: Mutex::new(VecDeque::new()),
            write_faults: Mutex::new(VecDeque::new()),
            latency: Duration::ZERO,
        }
    }

    /// Delay applied before every read and write.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the next read fail with `err`. Faults queue up in call order.
    pub fn fail_next_read(&self, err: RepositoryError) -> RepositoryResult<()> {
        self.read_faults.lock()?.push_back(err);
        Ok(())
    }

    /// Makes the next write fail with `err`. Faults queue up in call order.
    pub fn fail_next_write(&self, err: RepositoryError) -> RepositoryResult<()> {
        self.write_faults.lock()?.push_back(err);
        Ok(())
    }

    /// Current rows in store order.
    pub fn snapshot(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.rows.lock()?.clone())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn check_fault(queue: &Mutex<VecDeque<RepositoryError>>) -> RepositoryResult<()> {
        match queue.lock()?.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Rows accepted by `keep`, in store order.
    async fn select<F>(&self, keep: F) -> RepositoryResult<Vec<E>>
    where
        F: Fn(&E) -> bool + Send,
    {
        self.simulate_latency().await;
        Self::check_fault(&self.read_faults)?;

        let rows = self.rows.lock()?;
        Ok(rows.iter().filter(|row| keep(row)).cloned().collect())
    }

    /// Removes the first row accepted by `target`.
    async fn delete_one<F>(&self, target: F) -> RepositoryResult<()>
    where
        F: Fn(&E) -> bool + Send,
    {
        self.simulate_latency().await;
        Self::check_fault(&self.write_faults)?;

        let mut rows = self.rows.lock()?;
        let index = rows
            .iter()
            .position(|row| target(row))
            .ok_or(RepositoryError::NotFound)?;
        rows.remove(index);
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityReader<E> for FixtureTable<E> {
    async fn read_filtered(&self, filter: &ListFilter<E::Status>) -> RepositoryResult<Vec<E>> {
        self.select(|row| row.matches(filter)).await
    }
}

#[async_trait]
impl<E: Entity> EntityWriter<E> for FixtureTable<E> {
    async fn update_field(&self, id: &E::Id, change: E::Change) -> RepositoryResult<E> {
        self.simulate_latency().await;
        Self::check_fault(&self.write_faults)?;

        let mut rows = self.rows.lock()?;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        row.apply_change(&change);
        Ok(row.clone())
    }
}

/// Fixture-backed data source for every list domain.
#[derive(Debug)]
pub struct FixtureRepository {
    cases: FixtureTable<Case>,
    clients: FixtureTable<Client>,
    chats: FixtureTable<ChatSummary>,
    consultations: FixtureTable<VideoConsultation>,
    recordings: FixtureTable<VoiceRecording>,
    case_files: FixtureTable<CaseFile>,
}

impl FixtureRepository {
    pub fn new(
        cases: FixtureTable<Case>,
        clients: FixtureTable<Client>,
        chats: FixtureTable<ChatSummary>,
        consultations: FixtureTable<VideoConsultation>,
    ) -> Self {
        Self {
            cases,
            clients,
            chats,
            consultations,
            recordings: FixtureTable::new(Vec::new()),
            case_files: FixtureTable::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_recordings(mut self, recordings: FixtureTable<VoiceRecording>) -> Self {
        self.recordings = recordings;
        self
    }

    #[must_use]
    pub fn with_case_files(mut self, case_files: FixtureTable<CaseFile>) -> Self {
        self.case_files = case_files;
        self
    }

    /// Repository pre-populated with the dashboard's demo data.
    pub fn seeded(latency: Duration) -> Self {
        Self::new(
            FixtureTable::new(seed::cases()).with_latency(latency),
            FixtureTable::new(seed::clients()).with_latency(latency),
            FixtureTable::new(seed::chats()).with_latency(latency),
            FixtureTable::new(seed::consultations()).with_latency(latency),
        )
        .with_recordings(FixtureTable::new(seed::recordings()).with_latency(latency))
        .with_case_files(FixtureTable::new(seed::case_files()).with_latency(latency))
    }

    pub fn cases(&self) -> &FixtureTable<Case> {
        &self.cases
    }

    pub fn clients(&self) -> &FixtureTable<Client> {
        &self.clients
    }

    pub fn chats(&self) -> &FixtureTable<ChatSummary> {
        &self.chats
    }

    pub fn consultations(&self) -> &FixtureTable<VideoConsultation> {
        &self.consultations
    }

    pub fn recordings(&self) -> &FixtureTable<VoiceRecording> {
        &self.recordings
    }

    pub fn case_files(&self) -> &FixtureTable<CaseFile> {
        &self.case_files
    }
}

#[async_trait]
impl RecordingReader for FixtureRepository {
    async fn list_recordings(&self) -> RepositoryResult<Vec<VoiceRecording>> {
        self.recordings.select(|_| true).await
    }
}

#[async_trait]
impl RecordingWriter for FixtureRepository {
    async fn delete_recording(&self, id: &RecordingId) -> RepositoryResult<()> {
        self.recordings.delete_one(|rec| &rec.id == id).await
    }
}

#[async_trait]
impl CaseFileReader for FixtureRepository {
    async fn list_case_files(&self, case_id: &CaseId) -> RepositoryResult<Vec<CaseFile>> {
        self.case_files
            .select(|file| &file.case_id == case_id)
            .await
    }
}

#[async_trait]
impl CaseFileWriter for FixtureRepository {
    async fn delete_file(&self, id: &FileId) -> RepositoryResult<()> {
        self.case_files.delete_one(|file| &file.id == id).await
    }
}

/// Routes the capability traits for one entity type to its table.
macro_rules! delegate_to_table {
    ($entity:ty, $field:ident) => {
        #[async_trait]
        impl EntityReader<$entity> for FixtureRepository {
            async fn read_filtered(
                &self,
                filter: &ListFilter<<$entity as Entity>::Status>,
            ) -> RepositoryResult<Vec<$entity>> {
                self.$field.read_filtered(filter).await
            }
        }

        #[async_trait]
        impl EntityWriter<$entity> for FixtureRepository {
            async fn update_field(
                &self,
                id: &<$entity as Entity>::Id,
                change: <$entity as Entity>::Change,
            ) -> RepositoryResult<$entity> {
                self.$field.update_field(id, change).await
            }
        }
    };
}

delegate_to_table!(Case, cases);
delegate_to_table!(Client, clients);
delegate_to_table!(ChatSummary, chats);
delegate_to_table!(VideoConsultation, consultations);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::CaseChange;
    use crate::domain::filter::StatusFilter;
    use crate::domain::types::{CaseId, CaseStatus};

    #[tokio::test]
    async fn queued_faults_fire_once_in_order() {
        let table = FixtureTable::new(seed::cases());
        table
            .fail_next_read(RepositoryError::Transient("offline".into()))
            .unwrap();
        table.fail_next_read(RepositoryError::NotFound).unwrap();

        let filter = ListFilter::all();
        assert_eq!(
            table.read_filtered(&filter).await,
            Err(RepositoryError::Transient("offline".into()))
        );
        assert_eq!(
            table.read_filtered(&filter).await,
            Err(RepositoryError::NotFound)
        );
        assert!(table.read_filtered(&filter).await.is_ok());
    }

    #[tokio::test]
    async fn write_fault_leaves_rows_untouched() {
        let table = FixtureTable::new(seed::cases());
        let before = table.snapshot().unwrap();
        table
            .fail_next_write(RepositoryError::Transient("reset".into()))
            .unwrap();

        let id = CaseId::new("case-1").unwrap();
        let result = table
            .update_field(&id, CaseChange::Status(CaseStatus::Approved))
            .await;

        assert!(result.is_err());
        assert_eq!(table.snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn repository_routes_to_the_right_table() {
        let repo = FixtureRepository::seeded(Duration::ZERO);
        let pending = ListFilter::new(StatusFilter::Only(CaseStatus::Pending));

        let cases = EntityReader::<Case>::read_filtered(&repo, &pending)
            .await
            .unwrap();
        assert!(!cases.is_empty());
        assert!(cases.iter().all(|c| c.status == CaseStatus::Pending));

        let clients = EntityReader::<Client>::read_filtered(&repo, &ListFilter::all())
            .await
            .unwrap();
        assert_eq!(clients.len(), repo.clients().snapshot().unwrap().len());
    }

    #[tokio::test]
    async fn case_files_are_scoped_to_their_case() {
        let repo = FixtureRepository::seeded(Duration::ZERO);
        let case_id = CaseId::new("case-1").unwrap();

        let files = repo.list_case_files(&case_id).await.unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.case_id == case_id));

        let other = CaseId::new("case-5").unwrap();
        assert!(repo.list_case_files(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_recording_removes_only_that_row() {
        let repo = FixtureRepository::seeded(Duration::ZERO);
        let id = RecordingId::new("rec_2").unwrap();

        repo.delete_recording(&id).await.unwrap();

        let left = repo.list_recordings().await.unwrap();
        assert_eq!(left.len(), 4);
        assert!(left.iter().all(|r| r.id != id));
        assert_eq!(
            repo.delete_recording(&id).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn failed_file_delete_keeps_the_file() {
        let repo = FixtureRepository::seeded(Duration::ZERO);
        repo.case_files()
            .fail_next_write(RepositoryError::Transient("reset".into()))
            .unwrap();

        let id = FileId::new("file_1").unwrap();
        assert!(repo.delete_file(&id).await.is_err());
        assert_eq!(repo.case_files().snapshot().unwrap().len(), 4);
    }
}
