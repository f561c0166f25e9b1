use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::types::{CaseId, CaseStatus, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: CaseId,
    pub client_name: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub status: CaseStatus,
}

/// Single-field updates accepted for a case.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum CaseChange {
    Status(CaseStatus),
}

impl Case {
    #[must_use]
    pub fn new(
        id: CaseId,
        client_name: impl Into<String>,
        title: impl Into<String>,
        updated_at: DateTime<Utc>,
        status: CaseStatus,
    ) -> Self {
        Self {
            id,
            client_name: client_name.into().trim().to_string(),
            title: title.into().trim().to_string(),
            updated_at,
            status,
        }
    }
}

impl Entity for Case {
    type Id = CaseId;
    type Status = CaseStatus;
    type Change = CaseChange;

    const KIND: &'static str = "case";
    const ROUTE: &'static str = "/cases";

    fn parse_id(raw: &str) -> Result<CaseId, TypeConstraintError> {
        CaseId::new(raw)
    }

    fn id(&self) -> &CaseId {
        &self.id
    }

    fn status(&self) -> CaseStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.client_name.as_str(), self.title.as_str()]
    }

    fn apply_change(&mut self, change: &CaseChange) {
        match change {
            CaseChange::Status(status) => self.status = *status,
        }
    }

    fn parse_change(field: &str, value: &str) -> Result<CaseChange, TypeConstraintError> {
        match field {
            "status" => value.parse().map(CaseChange::Status),
            other => Err(TypeConstraintError::UnknownField {
                kind: Self::KIND,
                field: other.to_string(),
            }),
        }
    }
}
