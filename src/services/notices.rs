//! Wording of the notifications emitted for each list domain.

use crate::domain::Entity;
use crate::domain::case::{Case, CaseChange};
use crate::domain::chat::{ChatChange, ChatSummary};
use crate::domain::client::{Client, ClientChange};
use crate::domain::consultation::{ConsultationChange, VideoConsultation};
use crate::services::notification::Notification;

pub trait ListNotices: Entity {
    /// Plural noun used in read-failure messages.
    const PLURAL: &'static str;

    fn updated_notice(&self, change: &Self::Change) -> Notification;

    fn update_failed_notice(change: &Self::Change) -> Notification;

    fn load_failed_notice() -> Notification {
        Notification::error(format!("Failed to load {}", Self::PLURAL))
    }

    fn not_found_notice(id: &Self::Id) -> Notification {
        Notification::error(format!("The {} {id} no longer exists", Self::KIND))
    }
}

impl ListNotices for Case {
    const PLURAL: &'static str = "cases";

    fn updated_notice(&self, change: &CaseChange) -> Notification {
        match change {
            CaseChange::Status(status) => Notification::success(
                "Status updated",
                format!("Case {} has been {status}", self.id),
            ),
        }
    }

    fn update_failed_notice(_change: &CaseChange) -> Notification {
        Notification::error("Failed to update case status")
    }
}

impl ListNotices for Client {
    const PLURAL: &'static str = "clients";

    fn updated_notice(&self, change: &ClientChange) -> Notification {
        match change {
            ClientChange::Status(status) => Notification::success(
                "Status updated",
                format!("Client status has been updated to {status}"),
            ),
            ClientChange::Favorite(true) => Notification::success(
                "Added to favorites",
                format!("{} has been added to favorites", self.name),
            ),
            ClientChange::Favorite(false) => Notification::success(
                "Removed from favorites",
                format!("{} has been removed from favorites", self.name),
            ),
            ClientChange::Blocked(true) => Notification::success(
                "Client blocked",
                format!("{} has been blocked", self.name),
            ),
            ClientChange::Blocked(false) => Notification::success(
                "Client unblocked",
                format!("{} has been unblocked", self.name),
            ),
        }
    }

    fn update_failed_notice(change: &ClientChange) -> Notification {
        let what = match change {
            ClientChange::Status(_) => "client status",
            ClientChange::Favorite(_) => "favorite status",
            ClientChange::Blocked(_) => "blocked status",
        };
        Notification::error(format!("Failed to update {what}"))
    }
}

impl ListNotices for ChatSummary {
    const PLURAL: &'static str = "chats";

    fn updated_notice(&self, change: &ChatChange) -> Notification {
        match change {
            ChatChange::Status(status) => Notification::success(
                "Chat updated",
                format!("Chat with {} is now {status}", self.client_name),
            ),
        }
    }

    fn update_failed_notice(_change: &ChatChange) -> Notification {
        Notification::error("Failed to update chat status")
    }
}

impl ListNotices for VideoConsultation {
    const PLURAL: &'static str = "consultations";

    fn updated_notice(&self, change: &ConsultationChange) -> Notification {
        match change {
            ConsultationChange::Status(status) => Notification::success(
                "Status updated",
                format!("Consultation {} has been {status}", self.id),
            ),
        }
    }

    fn update_failed_notice(_change: &ConsultationChange) -> Notification {
        Notification::error("Failed to update consultation status")
    }
}
