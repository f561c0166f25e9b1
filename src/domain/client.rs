use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::filter::StatusFilter;
use crate::domain::types::{ClientId, ClientStatus, TypeConstraintError, parse_flag};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Identifier of the case the client is attached to, as shown in the table.
    pub case_id: String,
    pub contact_info: String,
    pub last_contact_date: DateTime<Utc>,
    pub status: ClientStatus,
    pub is_favorite: bool,
    pub is_blocked: bool,
}

/// Single-field updates accepted for a client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ClientChange {
    Status(ClientStatus),
    Favorite(bool),
    Blocked(bool),
}

impl Client {
    #[must_use]
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        case_id: impl Into<String>,
        contact_info: impl Into<String>,
        last_contact_date: DateTime<Utc>,
        status: ClientStatus,
    ) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            case_id: case_id.into().trim().to_string(),
            contact_info: contact_info.into().trim().to_string(),
            last_contact_date,
            status,
            is_favorite: false,
            is_blocked: false,
        }
    }

    #[must_use]
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    #[must_use]
    pub fn blocked(mut self, is_blocked: bool) -> Self {
        self.is_blocked = is_blocked;
        self
    }
}

impl Entity for Client {
    type Id = ClientId;
    type Status = ClientStatus;
    type Change = ClientChange;

    const KIND: &'static str = "client";
    const ROUTE: &'static str = "/clients";

    fn parse_id(raw: &str) -> Result<ClientId, TypeConstraintError> {
        ClientId::new(raw)
    }

    fn id(&self) -> &ClientId {
        &self.id
    }

    fn status(&self) -> ClientStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.case_id.as_str(),
            self.contact_info.as_str(),
        ]
    }

    fn default_status_filter() -> StatusFilter<ClientStatus> {
        StatusFilter::Only(ClientStatus::Active)
    }

    fn apply_change(&mut self, change: &ClientChange) {
        match change {
            ClientChange::Status(status) => self.status = *status,
            ClientChange::Favorite(flag) => self.is_favorite = *flag,
            ClientChange::Blocked(flag) => self.is_blocked = *flag,
        }
    }

    fn parse_change(field: &str, value: &str) -> Result<ClientChange, TypeConstraintError> {
        match field {
            "status" => value.parse().map(ClientChange::Status),
            "favorite" => parse_flag(value).map(ClientChange::Favorite),
            "blocked" => parse_flag(value).map(ClientChange::Blocked),
            other => Err(TypeConstraintError::UnknownField {
                kind: Self::KIND,
                field: other.to_string(),
            }),
        }
    }
}
