//! Guest - Directory entry DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fumi::GuestRecord;

/// Guest directory entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub id: String,
    #[schema(example = "鈴木太郎")]
    pub kanji_name: String,
    #[schema(example = "スズキタロウ")]
    pub kana_name: String,
    pub message: String,
}

impl From<&GuestRecord> for GuestResponse {
    fn from(record: &GuestRecord) -> Self {
        Self {
            id: record.id.clone(),
            kanji_name: record.kanji_name.clone(),
            kana_name: record.kana_name.clone(),
            message: record.message.clone(),
        }
    }
}
