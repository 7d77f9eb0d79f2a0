use crate::domain::video::{CategorisedVideo, VideoListing};
use crate::repository::VideoReader;

use super::{ServiceError, ServiceResult};

/// Active videos joined to their category, ordered by category name then
/// video title.
pub fn categorised_videos<R>(repo: &R) -> ServiceResult<Vec<CategorisedVideo>>
where
    R: VideoReader,
{
    repo.list_categorised_videos().map_err(|e| {
        log::error!("Failed to list categorised videos: {e}");
        ServiceError::Internal
    })
}

/// Active videos joined to their category, ordered by title.
pub fn active_video_listing<R>(repo: &R) -> ServiceResult<Vec<VideoListing>>
where
    R: VideoReader,
{
    repo.list_active_video_listing().map_err(|e| {
        log::error!("Failed to list videos with categories: {e}");
        ServiceError::Internal
    })
}
