use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::types::{ConsultationId, ConsultationStatus, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoConsultation {
    pub id: ConsultationId,
    pub client_name: String,
    pub scheduled_time: DateTime<Utc>,
    pub status: ConsultationStatus,
    /// Who may read the transcript, as displayed in the table.
    pub transcript_access: String,
    pub video_link: Option<String>,
    pub has_transcript: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ConsultationChange {
    Status(ConsultationStatus),
}

impl Entity for VideoConsultation {
    type Id = ConsultationId;
    type Status = ConsultationStatus;
    type Change = ConsultationChange;

    const KIND: &'static str = "consultation";
    const ROUTE: &'static str = "/consultations";

    fn parse_id(raw: &str) -> Result<ConsultationId, TypeConstraintError> {
        ConsultationId::new(raw)
    }

    fn id(&self) -> &ConsultationId {
        &self.id
    }

    fn status(&self) -> ConsultationStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.client_name.as_str()]
    }

    fn apply_change(&mut self, change: &ConsultationChange) {
        match change {
            ConsultationChange::Status(status) => self.status = *status,
        }
    }

    fn parse_change(field: &str, value: &str) -> Result<ConsultationChange, TypeConstraintError> {
        match field {
            "status" => value.parse().map(ConsultationChange::Status),
            other => Err(TypeConstraintError::UnknownField {
                kind: Self::KIND,
                field: other.to_string(),
            }),
        }
    }
}
