//! Voice recordings and case files shown next to the list screens.

use std::time::Duration;

use crate::domain::case_file::CaseFile;
use crate::domain::recording::VoiceRecording;
use crate::domain::types::{CaseId, FileId, RecordingId};
use crate::repository::errors::RepositoryError;
use crate::repository::{CaseFileReader, CaseFileWriter, RecordingReader, RecordingWriter};
use crate::services::controller::bounded;
use crate::services::{ServiceError, ServiceResult};

const RECORDING: &str = "recording";
const FILE: &str = "file";

fn write_error(kind: &'static str, id: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound {
            kind,
            id: id.to_string(),
        },
        source => {
            log::error!("Failed to delete {kind} {id}: {source}");
            ServiceError::WriteFailure {
                kind,
                id: id.to_string(),
                source,
            }
        }
    }
}

pub async fn load_recordings<R>(repo: &R, timeout: Duration) -> ServiceResult<Vec<VoiceRecording>>
where
    R: RecordingReader + ?Sized,
{
    let result = bounded(timeout, repo.list_recordings()).await;
    result.map_err(|source| {
        log::error!("Failed to load recordings: {source}");
        ServiceError::ReadFailure {
            kind: RECORDING,
            source,
        }
    })
}

pub async fn delete_recording<R>(repo: &R, raw_id: &str, timeout: Duration) -> ServiceResult<()>
where
    R: RecordingWriter + ?Sized,
{
    let id = RecordingId::new(raw_id)?;
    bounded(timeout, repo.delete_recording(&id))
        .await
        .map_err(|err| write_error(RECORDING, raw_id, err))?;
    log::info!("Deleted recording {id}");
    Ok(())
}

/// Lists the files attached to the case `raw_case_id`.
///
/// A case without files yields an empty list, not an error.
pub async fn load_case_files<R>(
    repo: &R,
    raw_case_id: &str,
    timeout: Duration,
) -> ServiceResult<Vec<CaseFile>>
where
    R: CaseFileReader + ?Sized,
{
    let case_id = CaseId::new(raw_case_id)?;
    let result = bounded(timeout, repo.list_case_files(&case_id)).await;
    result.map_err(|source| {
        log::error!("Failed to load files of case {case_id}: {source}");
        ServiceError::ReadFailure { kind: FILE, source }
    })
}

pub async fn delete_case_file<R>(repo: &R, raw_id: &str, timeout: Duration) -> ServiceResult<()>
where
    R: CaseFileWriter + ?Sized,
{
    let id = FileId::new(raw_id)?;
    bounded(timeout, repo.delete_file(&id))
        .await
        .map_err(|err| write_error(FILE, raw_id, err))?;
    log::info!("Deleted file {id}");
    Ok(())
}
