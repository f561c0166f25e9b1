use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::types::{ChatId, ChatStatus, ClientId, TypeConstraintError};

/// Summary row of a conversation with a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatSummary {
    pub id: ChatId,
    pub client_id: ClientId,
    pub client_name: String,
    pub client_avatar: Option<String>,
    pub last_message_preview: String,
    pub last_message_time: DateTime<Utc>,
    pub unread_count: u32,
    pub token_usage: u32,
    pub status: ChatStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ChatChange {
    Status(ChatStatus),
}

impl Entity for ChatSummary {
    type Id = ChatId;
    type Status = ChatStatus;
    type Change = ChatChange;

    const KIND: &'static str = "chat";
    const ROUTE: &'static str = "/chats";

    fn parse_id(raw: &str) -> Result<ChatId, TypeConstraintError> {
        ChatId::new(raw)
    }

    fn id(&self) -> &ChatId {
        &self.id
    }

    fn status(&self) -> ChatStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.last_message_preview.as_str(),
        ]
    }

    fn apply_change(&mut self, change: &ChatChange) {
        match change {
            ChatChange::Status(status) => self.status = *status,
        }
    }

    fn parse_change(field: &str, value: &str) -> Result<ChatChange, TypeConstraintError> {
        match field {
            "status" => value.parse().map(ChatChange::Status),
            other => Err(TypeConstraintError::UnknownField {
                kind: Self::KIND,
                field: other.to_string(),
            }),
        }
    }
}
