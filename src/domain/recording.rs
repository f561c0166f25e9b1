use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordingId;

/// Voice memo recorded by a lawyer, with its generated text if any.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VoiceRecording {
    pub id: RecordingId,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    /// Length as displayed, e.g. `02:25`.
    pub duration: String,
    pub audio_url: String,
    pub transcription: Option<String>,
    pub summary: Option<String>,
}
