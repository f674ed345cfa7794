use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freestanding uploaded image, unrelated to any specific quote.
///
/// Managed (add/delete) from the admin view only. `data` is the image as a
/// base64 text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    pub data: String,
}

impl AssetRecord {
    pub fn new(
        name: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            data: data.into(),
        }
    }
}
