//! Participant record as exchanged with the registration API

use super::identity::IdForm;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attendance status of a participant; carried through, never interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Registered,
    #[serde(rename = "Checked_In")]
    CheckedIn,
    #[serde(rename = "No_Show")]
    NoShow,
    Cancelled,
    /// Any other label, re-sent exactly as received
    #[serde(untagged)]
    Other(String),
}

impl AttendanceStatus {
    /// The labels the generator draws from
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Registered,
        AttendanceStatus::CheckedIn,
        AttendanceStatus::NoShow,
        AttendanceStatus::Cancelled,
    ];
}

/// A single participant record.
///
/// The match key travels under the `mid` wire key. Everything this client
/// does not interpret (`phone`, `username`, `metadata` and any unknown
/// field) is kept in `extra` and written back out exactly as received,
/// including explicit nulls and non-string values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "mid", alias = "matchKey", default)]
    pub match_key: Option<String>,
    pub attendance_status: AttendanceStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Name and email tuple used to reconcile records whose id changed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecondaryKey {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Participant {
    /// Whether a durable match key has been issued; blank keys count as absent
    pub fn has_match_key(&self) -> bool {
        self.match_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn id_form(&self) -> IdForm {
        IdForm::of(&self.participant_id)
    }

    /// True when the id form agrees with match-key presence, which holds for
    /// every freshly created record but not after a promotion.
    pub fn is_identity_consistent(&self) -> bool {
        (self.id_form() == IdForm::Durable) == self.has_match_key()
    }

    /// Trimmed, case-insensitive secondary key
    pub fn secondary_key(&self) -> SecondaryKey {
        let norm = |s: &str| s.trim().to_lowercase();
        SecondaryKey {
            first_name: norm(&self.first_name),
            last_name: norm(&self.last_name),
            email: norm(&self.email),
        }
    }

    /// Set a pass-through attribute such as `phone` or `metadata`
    pub fn with_attribute<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    pub fn phone(&self) -> Option<&Value> {
        self.extra.get("phone")
    }

    pub fn username(&self) -> Option<&Value> {
        self.extra.get("username")
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.extra.get("metadata").and_then(Value::as_object)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.metadata()?.get("eventId").and_then(Value::as_str)
    }
}
