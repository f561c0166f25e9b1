use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CaseId, FileId};

/// Backend holding the file contents.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    S3,
    Local,
}

/// Metadata of a document attached to a case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub id: FileId,
    pub case_id: CaseId,
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// MIME type.
    pub file_type: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
    pub storage_location: StorageLocation,
    pub encryption_type: Option<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_location_serializes_lowercase() {
        let json = serde_json::to_string(&StorageLocation::S3).unwrap();
        assert_eq!(json, "\"s3\"");
        assert_eq!(
            serde_json::from_str::<StorageLocation>("\"local\"").unwrap(),
            StorageLocation::Local
        );
    }
}
