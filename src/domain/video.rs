use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, VideoId, VideoTitle, YoutubeCode};

/// Canonical video record.
///
/// Videos are never hard-deleted; `is_active` is flipped instead so that a
/// removed video stays addressable for restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_modified: Option<NaiveDateTime>,
}

/// Data required to insert a new [`Video`].
///
/// New videos start active with `date_last_modified` unset; it stays null
/// until the first mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVideo {
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
    pub date_created: NaiveDateTime,
}

/// Optional-field patch applied to an existing [`Video`].
///
/// Fields left as `None` keep the persisted value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoPatch {
    pub title: Option<VideoTitle>,
    pub youtube_code: Option<YoutubeCode>,
    pub category_id: Option<CategoryId>,
}

impl VideoPatch {
    /// Merge this patch onto a persisted video, overriding only the fields
    /// that are present and stamping the modification time.
    pub fn apply(self, video: &Video, now: NaiveDateTime) -> VideoUpdate {
        VideoUpdate {
            title: self.title.unwrap_or_else(|| video.title.clone()),
            youtube_code: self.youtube_code.unwrap_or_else(|| video.youtube_code.clone()),
            category_id: self.category_id.unwrap_or(video.category_id),
            date_last_modified: now,
        }
    }
}

/// Fully-merged field set written back by a video update.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoUpdate {
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
    pub date_last_modified: NaiveDateTime,
}

/// Row shape of the categorised-videos join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorisedVideo {
    pub category_name: String,
    pub title: String,
    pub youtube_code: String,
}

/// Row shape of the active-video listing join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoListing {
    pub id: i32,
    pub title: String,
    pub youtube_code: String,
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryId, VideoId, VideoTitle, YoutubeCode};
    use chrono::DateTime;

    fn sample_video() -> Video {
        Video {
            id: VideoId::new(1).unwrap(),
            title: VideoTitle::new("Original title").unwrap(),
            youtube_code: YoutubeCode::new("dQw4w9WgXcQ").unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            is_active: true,
            date_created: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            date_last_modified: None,
        }
    }

    #[test]
    fn empty_patch_keeps_all_fields() {
        let video = sample_video();
        let now = DateTime::from_timestamp(60, 0).unwrap().naive_utc();

        let update = VideoPatch::default().apply(&video, now);

        assert_eq!(update.title, video.title);
        assert_eq!(update.youtube_code, video.youtube_code);
        assert_eq!(update.category_id, video.category_id);
        assert_eq!(update.date_last_modified, now);
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let video = sample_video();
        let now = DateTime::from_timestamp(60, 0).unwrap().naive_utc();
        let patch = VideoPatch {
            title: Some(VideoTitle::new("New title").unwrap()),
            ..Default::default()
        };

        let update = patch.apply(&video, now);

        assert_eq!(update.title, "New title");
        assert_eq!(update.youtube_code, video.youtube_code);
        assert_eq!(update.category_id, video.category_id);
    }
}
