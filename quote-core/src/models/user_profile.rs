use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organizer identity plus event metadata, collected at registration.
///
/// One active profile per session; also appended (deduplicated by email) to
/// the directors roster whenever a profile is submitted. `id` and
/// `timestamp` are stamped by the roster upsert, not at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub club_name: String,
    pub event_name: String,
    pub event_location: String,
    pub est_participants: String,
    pub event_date: String,
    pub event_time: String,
    pub title: String,
    pub designation: String,
    pub full_name: String,
    pub email: String,
    pub cell_number: String,
    pub alt_contact: String,
    #[serde(rename = "signedNDA")]
    pub signed_nda: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Generates a roster id for a director entry.
    pub fn new_director_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()[..9].to_string()
    }
}
