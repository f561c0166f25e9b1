//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers are opaque strings that must not be blank, and every status is
//! a closed enumeration. Once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided status is not part of the domain enumeration.
    #[error("unknown {kind} status: {value}")]
    UnknownStatus { kind: &'static str, value: String },
    /// Provided mutation field is not supported by the domain.
    #[error("unknown {kind} field: {field}")]
    UnknownField { kind: &'static str, field: String },
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Parses a boolean flag as submitted by HTML forms and query strings.
pub fn parse_flag(value: &str) -> Result<bool, TypeConstraintError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(TypeConstraintError::InvalidValue(other.to_string())),
    }
}

/// Macro to generate lightweight newtypes for opaque string identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier ensuring it is not blank.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into().trim().to_string();
                if value.is_empty() {
                    Err(TypeConstraintError::EmptyString)
                } else {
                    Ok(Self(value))
                }
            }

            /// Borrow the identifier as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CaseId, "Unique identifier for a legal case.");
id_newtype!(ClientId, "Unique identifier for a client of the practice.");
id_newtype!(ChatId, "Unique identifier for a chat conversation.");
id_newtype!(ConsultationId, "Unique identifier for a consultation.");
id_newtype!(RecordingId, "Unique identifier for a voice recording.");
id_newtype!(FileId, "Unique identifier for a file attached to a case.");

/// Closed status enumeration attached to every listed entity.
pub trait ListStatus:
    Copy + Eq + Debug + Display + FromStr<Err = TypeConstraintError> + Send + Sync + 'static
{
    /// Every value of the enumeration in display order.
    const ALL: &'static [Self];

    /// Wire representation used in URLs, forms and JSON.
    fn as_str(&self) -> &'static str;
}

/// Macro to generate a status enumeration with its string conversions.
macro_rules! status_enum {
    ($name:ident, $kind:literal, $doc:expr, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl ListStatus for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(TypeConstraintError::UnknownStatus {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

status_enum!(CaseStatus, "case", "Review state of a legal case.", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

status_enum!(ClientStatus, "client", "Engagement state of a client.", {
    Active => "active",
    Inactive => "inactive",
    Pending => "pending",
});

status_enum!(ChatStatus, "chat", "Whether a chat conversation is still open.", {
    Active => "active",
    Archived => "archived",
});

status_enum!(ConsultationStatus, "consultation", "Approval state of a video consultation.", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_blank_values() {
        assert_eq!(CaseId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(CaseId::new(" case-1 ").unwrap().as_str(), "case-1");
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: ClientId = serde_json::from_str("\"client-7\"").unwrap();
        assert_eq!(id.as_str(), "client-7");
        assert!(serde_json::from_str::<ClientId>("\"\"").is_err());
    }

    #[test]
    fn statuses_parse_case_insensitively() {
        assert_eq!("Approved".parse::<CaseStatus>(), Ok(CaseStatus::Approved));
        let parsed: Result<ClientStatus, _> = " inactive ".parse();
        assert_eq!(parsed, Ok(ClientStatus::Inactive));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "closed".parse::<CaseStatus>().unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::UnknownStatus {
                kind: "case",
                value: "closed".to_string(),
            }
        );
        assert!("all".parse::<ChatStatus>().is_err());
    }

    #[test]
    fn status_display_matches_wire_format() {
        for status in ConsultationStatus::ALL {
            let parsed: Result<ConsultationStatus, _> = status.to_string().parse();
            assert_eq!(parsed, Ok(*status));
        }
        let json = serde_json::to_string(&ChatStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
    }

    #[test]
    fn flags_accept_form_spellings() {
        assert_eq!(parse_flag("on"), Ok(true));
        assert_eq!(parse_flag("FALSE"), Ok(false));
        assert!(parse_flag("maybe").is_err());
    }
}
