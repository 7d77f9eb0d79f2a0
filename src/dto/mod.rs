//! Plain serializable response shapes.

use serde::Serialize;

pub mod categories;
pub mod videos;

/// Confirmation payload for hard and soft deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedDto {
    #[serde(rename = "Deleted")]
    pub deleted: i32,
}

/// Confirmation payload for restores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestoredDto {
    #[serde(rename = "Restored")]
    pub restored: i32,
}
