use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Result of inserting one document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResultDto {
    pub inserted_id: Uuid,
}

/// Result of updating documents by filter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultDto {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResultDto {
    pub fn from_rows(rows_affected: u64) -> Self {
        Self {
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

/// Result of deleting documents by filter. A zero count means nothing matched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultDto {
    pub deleted_count: u64,
}
