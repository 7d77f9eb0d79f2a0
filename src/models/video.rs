use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, VideoTitle, YoutubeCode};
use crate::domain::video::{
    NewVideo as DomainNewVideo, Video as DomainVideo, VideoUpdate as DomainVideoUpdate,
};

/// Diesel model representing the `video` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::video)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_modified: Option<NaiveDateTime>,
}

/// Insertable form of [`Video`].
///
/// `is_active` defaults to true in the schema and `date_last_modified`
/// stays null until the first update, so neither is part of the insert.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::video)]
pub struct NewVideo {
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub date_created: NaiveDateTime,
}

/// Changeset written by a video update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::video)]
pub struct VideoUpdate {
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub date_last_modified: NaiveDateTime,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            title: VideoTitle::new(video.title)?,
            youtube_code: YoutubeCode::new(video.youtube_code)?,
            category_id: video.category_id.try_into()?,
            is_active: video.is_active,
            date_created: video.date_created,
            date_last_modified: video.date_last_modified,
        })
    }
}

impl From<DomainNewVideo> for NewVideo {
    fn from(video: DomainNewVideo) -> Self {
        Self {
            title: video.title.into_inner(),
            youtube_code: video.youtube_code.into_inner(),
            category_id: video.category_id.get(),
            date_created: video.date_created,
        }
    }
}

impl From<DomainVideoUpdate> for VideoUpdate {
    fn from(update: DomainVideoUpdate) -> Self {
        Self {
            title: update.title.into_inner(),
            youtube_code: update.youtube_code.into_inner(),
            category_id: update.category_id.get(),
            date_last_modified: update.date_last_modified,
        }
    }
}
