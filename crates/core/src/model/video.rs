use serde::{Deserialize, Serialize};

/// A user-uploaded video the backend has indexed. Appended to the uploaded
/// list on success and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedVideo {
    pub id: String,
    pub title: String,
    pub chunks: u32,
}
