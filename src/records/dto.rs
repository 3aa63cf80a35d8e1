use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Projection returned by every help/danger listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecordItem {
    pub id: Uuid,
    pub about: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordsRequest {
    pub abouts: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditRecordRequest {
    pub about: String,
}

#[derive(Debug, Deserialize)]
pub struct EditManyItem {
    pub id: Uuid,
    pub about: String,
}

#[derive(Debug, Deserialize)]
pub struct EditManyRequest {
    pub items: Vec<EditManyItem>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteManyRequest {
    pub ids: Vec<Uuid>,
}
