pub mod memory;
pub mod repository;

pub use memory::MemoryStore;
pub use repository::{QuoteStore, StoreError};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::UserProfile;

    /// A filled-in organizer profile for tests, varying only by email.
    pub fn profile_with_email(email: &str) -> UserProfile {
        UserProfile {
            id: None,
            club_name: "Highveld Harriers".to_string(),
            event_name: "City Night Run".to_string(),
            event_location: "Johannesburg".to_string(),
            est_participants: "2500".to_string(),
            event_date: "2026-03-14".to_string(),
            event_time: "18:30".to_string(),
            title: "Ms".to_string(),
            designation: "Race Director".to_string(),
            full_name: "Thandi Nkosi".to_string(),
            email: email.to_string(),
            cell_number: "+27 82 000 0000".to_string(),
            alt_contact: String::new(),
            signed_nda: true,
            timestamp: None,
        }
    }
}
