use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::video::Video;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDto {
    pub id: i32,
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_modified: Option<NaiveDateTime>,
}

impl From<Video> for VideoDto {
    fn from(value: Video) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            youtube_code: value.youtube_code.into_inner(),
            category_id: value.category_id.get(),
            is_active: value.is_active,
            date_created: value.date_created,
            date_last_modified: value.date_last_modified,
        }
    }
}
