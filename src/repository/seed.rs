//! Demo rows served by [`FixtureRepository`](crate::repository::FixtureRepository).

use chrono::{DateTime, Utc};

use crate::domain::case::Case;
use crate::domain::case_file::{CaseFile, StorageLocation};
use crate::domain::chat::ChatSummary;
use crate::domain::client::Client;
use crate::domain::consultation::VideoConsultation;
use crate::domain::recording::VoiceRecording;
use crate::domain::types::{
    CaseStatus, ChatStatus, ClientStatus, ConsultationStatus, TypeConstraintError,
};

/// Parses an RFC 3339 literal, falling back to the Unix epoch.
fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|err| {
            log::warn!("Invalid fixture timestamp {timestamp}: {err}");
            DateTime::default()
        })
}

/// Builds the identifier of one fixture row; a rejected literal drops that row only.
fn id<T>(raw: &'static str) -> Option<T>
where
    T: TryFrom<&'static str, Error = TypeConstraintError>,
{
    T::try_from(raw)
        .map_err(|err| log::warn!("Skipping fixture row {raw:?}: {err}"))
        .ok()
}

fn case(
    raw_id: &'static str,
    client_name: &str,
    title: &str,
    updated_at: &str,
    status: CaseStatus,
) -> Option<Case> {
    let case_id = id(raw_id)?;
    let updated_at = at(updated_at);
    Some(Case::new(case_id, client_name, title, updated_at, status))
}

pub fn cases() -> Vec<Case> {
    [
        case(
            "case-1",
            "John Smith",
            "Contract Dispute",
            "2025-03-24T11:45:00Z",
            CaseStatus::Pending,
        ),
        case(
            "case-2",
            "Sarah Johnson",
            "Property Settlement",
            "2025-03-23T09:15:00Z",
            CaseStatus::Approved,
        ),
        case(
            "case-3",
            "Michael Brown",
            "Employment Claim",
            "2025-03-22T14:30:00Z",
            CaseStatus::Pending,
        ),
        case(
            "case-4",
            "Emily Davis",
            "Trademark Registration",
            "2025-03-20T16:00:00Z",
            CaseStatus::Rejected,
        ),
        case(
            "case-5",
            "Robert Wilson",
            "Lease Review",
            "2025-03-18T10:20:00Z",
            CaseStatus::Pending,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

struct ClientRow {
    id: &'static str,
    name: &'static str,
    case_id: &'static str,
    contact: &'static str,
    last_contact: &'static str,
    status: ClientStatus,
    favorite: bool,
    blocked: bool,
}

impl ClientRow {
    fn build(self) -> Option<Client> {
        let client = Client::new(
            id(self.id)?,
            self.name,
            self.case_id,
            self.contact,
            at(self.last_contact),
            self.status,
        );
        Some(client.favorite(self.favorite).blocked(self.blocked))
    }
}

pub fn clients() -> Vec<Client> {
    [
        ClientRow {
            id: "client-1",
            name: "John Smith",
            case_id: "case-1",
            contact: "john.smith@example.com",
            last_contact: "2025-03-24T11:45:00Z",
            status: ClientStatus::Active,
            favorite: true,
            blocked: false,
        },
        ClientRow {
            id: "client-2",
            name: "Sarah Johnson",
            case_id: "case-2",
            contact: "+1 555 0102",
            last_contact: "2025-03-23T09:15:00Z",
            status: ClientStatus::Active,
            favorite: false,
            blocked: false,
        },
        ClientRow {
            id: "client-3",
            name: "Michael Brown",
            case_id: "case-3",
            contact: "michael.brown@example.com",
            last_contact: "2025-03-10T08:00:00Z",
            status: ClientStatus::Inactive,
            favorite: false,
            blocked: false,
        },
        ClientRow {
            id: "client-4",
            name: "Emily Davis",
            case_id: "case-4",
            contact: "+1 555 0147",
            last_contact: "2025-03-21T13:30:00Z",
            status: ClientStatus::Pending,
            favorite: false,
            blocked: false,
        },
        ClientRow {
            id: "client-5",
            name: "Robert Wilson",
            case_id: "case-5",
            contact: "r.wilson@example.com",
            last_contact: "2025-02-27T17:05:00Z",
            status: ClientStatus::Active,
            favorite: false,
            blocked: true,
        },
    ]
    .into_iter()
    .filter_map(ClientRow::build)
    .collect()
}

struct ChatRow {
    id: &'static str,
    client_id: &'static str,
    client_name: &'static str,
    preview: &'static str,
    time: &'static str,
    unread: u32,
    tokens: u32,
    status: ChatStatus,
}

impl ChatRow {
    fn build(self) -> Option<ChatSummary> {
        Some(ChatSummary {
            id: id(self.id)?,
            client_id: id(self.client_id)?,
            client_name: self.client_name.to_string(),
            client_avatar: None,
            last_message_preview: self.preview.to_string(),
            last_message_time: at(self.time),
            unread_count: self.unread,
            token_usage: self.tokens,
            status: self.status,
        })
    }
}

pub fn chats() -> Vec<ChatSummary> {
    [
        ChatRow {
            id: "chat-1",
            client_id: "client-1",
            client_name: "John Smith",
            preview: "Thanks, I will send the signed contract today.",
            time: "2025-03-24T12:10:00Z",
            unread: 2,
            tokens: 1250,
            status: ChatStatus::Active,
        },
        ChatRow {
            id: "chat-2",
            client_id: "client-2",
            client_name: "Sarah Johnson",
            preview: "When is the settlement hearing?",
            time: "2025-03-23T18:42:00Z",
            unread: 0,
            tokens: 860,
            status: ChatStatus::Active,
        },
        ChatRow {
            id: "chat-3",
            client_id: "client-3",
            client_name: "Michael Brown",
            preview: "Please find the employment records attached.",
            time: "2025-03-15T09:05:00Z",
            unread: 0,
            tokens: 2310,
            status: ChatStatus::Archived,
        },
        ChatRow {
            id: "chat-4",
            client_id: "client-4",
            client_name: "Emily Davis",
            preview: "Can we discuss the trademark objection?",
            time: "2025-03-22T07:55:00Z",
            unread: 5,
            tokens: 415,
            status: ChatStatus::Active,
        },
    ]
    .into_iter()
    .filter_map(ChatRow::build)
    .collect()
}

struct ConsultationRow {
    id: &'static str,
    client_name: &'static str,
    scheduled: &'static str,
    status: ConsultationStatus,
    access: &'static str,
    link: Option<&'static str>,
    has_transcript: bool,
}

impl ConsultationRow {
    fn build(self) -> Option<VideoConsultation> {
        Some(VideoConsultation {
            id: id(self.id)?,
            client_name: self.client_name.to_string(),
            scheduled_time: at(self.scheduled),
            status: self.status,
            transcript_access: self.access.to_string(),
            video_link: self.link.map(str::to_string),
            has_transcript: self.has_transcript,
        })
    }
}

pub fn consultations() -> Vec<VideoConsultation> {
    [
        ConsultationRow {
            id: "vc-1",
            client_name: "John Smith",
            scheduled: "2025-03-26T10:00:00Z",
            status: ConsultationStatus::Approved,
            access: "Lawyer and client",
            link: Some("https://meet.example.com/vc-1"),
            has_transcript: true,
        },
        ConsultationRow {
            id: "vc-2",
            client_name: "Sarah Johnson",
            scheduled: "2025-03-27T14:30:00Z",
            status: ConsultationStatus::Pending,
            access: "Lawyer only",
            link: None,
            has_transcript: false,
        },
        ConsultationRow {
            id: "vc-3",
            client_name: "Michael Brown",
            scheduled: "2025-03-28T09:15:00Z",
            status: ConsultationStatus::Rejected,
            access: "Lawyer only",
            link: None,
            has_transcript: false,
        },
        ConsultationRow {
            id: "vc-4",
            client_name: "Emily Davis",
            scheduled: "2025-03-29T16:45:00Z",
            status: ConsultationStatus::Pending,
            access: "Lawyer and client",
            link: Some("https://meet.example.com/vc-4"),
            has_transcript: false,
        },
    ]
    .into_iter()
    .filter_map(ConsultationRow::build)
    .collect()
}

fn recording(raw_id: &'static str, created_at: &str, duration: &str) -> Option<VoiceRecording> {
    Some(VoiceRecording {
        id: id(raw_id)?,
        title: "Acme Co.".to_string(),
        created_by: "Harold".to_string(),
        created_at: at(created_at),
        duration: duration.to_string(),
        audio_url: format!("https://media.example.com/recordings/{raw_id}.mp3"),
        transcription: None,
        summary: None,
    })
}

pub fn recordings() -> Vec<VoiceRecording> {
    [
        recording("rec_1", "2025-02-28T10:00:00Z", "02:25"),
        recording("rec_2", "2025-02-28T11:30:00Z", "02:25"),
        recording("rec_3", "2025-02-28T14:15:00Z", "02:20"),
        recording("rec_4", "2025-02-28T16:45:00Z", "02:20"),
        recording("rec_5", "2025-02-28T17:30:00Z", "02:35"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

struct FileRow {
    id: &'static str,
    case_id: &'static str,
    name: &'static str,
    size: u64,
    mime: &'static str,
    description: &'static str,
    uploaded_at: &'static str,
}

impl FileRow {
    fn build(self) -> Option<CaseFile> {
        Some(CaseFile {
            id: id(self.id)?,
            case_id: id(self.case_id)?,
            file_name: self.name.to_string(),
            file_size: self.size,
            file_type: self.mime.to_string(),
            description: self.description.to_string(),
            uploaded_at: at(self.uploaded_at),
            uploaded_by: "user_1".to_string(),
            storage_location: StorageLocation::S3,
            encryption_type: Some("AES256".to_string()),
            url: format!("https://files.example.com/{}/{}", self.id, self.name),
        })
    }
}

pub fn case_files() -> Vec<CaseFile> {
    [
        FileRow {
            id: "file_1",
            case_id: "case-1",
            name: "contract.pdf",
            size: 1_024_000,
            mime: "application/pdf",
            description: "Original contract document",
            uploaded_at: "2025-03-22T14:30:00Z",
        },
        FileRow {
            id: "file_2",
            case_id: "case-1",
            name: "amendment.docx",
            size: 512_000,
            mime: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            description: "Contract amendment",
            uploaded_at: "2025-03-23T09:15:00Z",
        },
        FileRow {
            id: "file_3",
            case_id: "case-1",
            name: "signature.jpg",
            size: 256_000,
            mime: "image/jpeg",
            description: "Client signature",
            uploaded_at: "2025-03-24T11:45:00Z",
        },
        FileRow {
            id: "file_4",
            case_id: "case-2",
            name: "settlement-draft.pdf",
            size: 768_000,
            mime: "application/pdf",
            description: "Draft settlement agreement",
            uploaded_at: "2025-03-23T10:05:00Z",
        },
    ]
    .into_iter()
    .filter_map(FileRow::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CaseId;

    #[test]
    fn every_fixture_row_is_built() {
        assert_eq!(cases().len(), 5);
        assert_eq!(clients().len(), 5);
        assert_eq!(chats().len(), 4);
        assert_eq!(consultations().len(), 4);
        assert_eq!(recordings().len(), 5);
        assert_eq!(case_files().len(), 4);
    }

    #[test]
    fn timestamps_parse() {
        let epoch = DateTime::<Utc>::default();
        assert!(cases().iter().all(|c| c.updated_at != epoch));
    }

    #[test]
    fn rejected_id_drops_only_its_row() {
        assert!(id::<CaseId>("   ").is_none());

        let ts = "2025-03-24T11:45:00Z";
        let rows = [
            case("case-1", "A", "First", ts, CaseStatus::Pending),
            case(" ", "B", "Second", ts, CaseStatus::Pending),
            case("case-3", "C", "Third", ts, CaseStatus::Pending),
        ];
        let built: Vec<Case> = rows.into_iter().flatten().collect();

        assert_eq!(built.len(), 2);
        assert_eq!(built[1].id.as_str(), "case-3");
        assert_eq!(built[1].client_name, "C");
    }

    #[test]
    fn rows_keep_their_own_data() {
        let rows = clients();
        let fifth = rows.iter().find(|c| c.id.as_str() == "client-5").unwrap();
        assert_eq!(fifth.name, "Robert Wilson");
        assert!(fifth.is_blocked);
    }
}
