use chrono::Utc;

use crate::domain::types::VideoId;
use crate::domain::video::Video;
use crate::forms::videos::{AddVideoFormPayload, UpdateVideoFormPayload};
use crate::repository::{CategoryReader, VideoReader, VideoWriter};

use super::{ServiceError, ServiceResult};

/// Return active videos, oldest first.
pub fn list_videos<R>(repo: &R) -> ServiceResult<Vec<Video>>
where
    R: VideoReader,
{
    repo.list_active_videos().map_err(|e| {
        log::error!("Failed to list videos: {e}");
        ServiceError::Internal
    })
}

/// Fetch a single active video; inactive rows are never exposed here.
pub fn get_video<R>(id: VideoId, repo: &R) -> ServiceResult<Video>
where
    R: VideoReader,
{
    match repo.get_active_video_by_id(id) {
        Ok(Some(video)) => Ok(video),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a video under an existing category.
///
/// The new row starts active with `date_last_modified` unset.
pub fn create_video<R>(payload: AddVideoFormPayload, repo: &R) -> ServiceResult<Video>
where
    R: CategoryReader + VideoWriter,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let now = Utc::now().naive_utc();
    repo.create_video(&payload.into_new_video(now)).map_err(|e| {
        log::error!("Failed to create video: {e}");
        ServiceError::Internal
    })
}

/// Apply a partial update to an active video and return the refreshed row.
///
/// Only the fields present in the payload are overridden; the merge is an
/// explicit field-by-field override via [`crate::domain::video::VideoPatch`].
pub fn update_video<R>(
    id: VideoId,
    payload: UpdateVideoFormPayload,
    repo: &R,
) -> ServiceResult<Video>
where
    R: CategoryReader + VideoReader + VideoWriter,
{
    let current = match repo.get_active_video_by_id(id) {
        Ok(Some(video)) => video,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if let Some(category_id) = payload.category_id {
        match repo.get_category_by_id(category_id) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::NotFound),
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    let now = Utc::now().naive_utc();
    let update = payload.into_patch().apply(&current, now);
    repo.update_video(id, &update).map_err(|e| {
        log::error!("Failed to update video: {e}");
        ServiceError::Internal
    })?;

    match repo.get_video_by_id(id) {
        Ok(Some(video)) => Ok(video),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to reload video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Soft-delete an active video.
pub fn soft_delete_video<R>(id: VideoId, repo: &R) -> ServiceResult<VideoId>
where
    R: VideoReader + VideoWriter,
{
    match repo.get_active_video_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    repo.set_video_active(id, false, Utc::now().naive_utc())
        .map_err(|e| {
            log::error!("Failed to soft-delete video: {e}");
            ServiceError::Internal
        })?;

    Ok(id)
}

/// Restore a video by id.
///
/// The target only has to exist; restoring an already-active video is a
/// no-op success (the modification timestamp is still refreshed).
pub fn restore_video<R>(id: VideoId, repo: &R) -> ServiceResult<VideoId>
where
    R: VideoReader + VideoWriter,
{
    match repo.get_video_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    repo.set_video_active(id, true, Utc::now().naive_utc())
        .map_err(|e| {
            log::error!("Failed to restore video: {e}");
            ServiceError::Internal
        })?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName, VideoTitle, YoutubeCode};
    use crate::repository::test::TestRepository;

    fn repo_with_category() -> TestRepository {
        TestRepository::new().with_categories(vec![Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Music").unwrap(),
        }])
    }

    fn add_payload() -> AddVideoFormPayload {
        AddVideoFormPayload {
            title: VideoTitle::new("First video").unwrap(),
            youtube_code: YoutubeCode::new("dQw4w9WgXcQ").unwrap(),
            category_id: CategoryId::new(1).unwrap(),
        }
    }

    #[test]
    fn create_requires_existing_category() {
        let repo = TestRepository::new();

        let err = create_video(add_payload(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn created_video_starts_active_and_unmodified() {
        let repo = repo_with_category();

        let video = create_video(add_payload(), &repo).unwrap();

        assert!(video.is_active);
        assert!(video.date_last_modified.is_none());
        assert_eq!(get_video(video.id, &repo).unwrap(), video);
    }

    #[test]
    fn soft_deleted_video_disappears_until_restored() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();

        soft_delete_video(video.id, &repo).unwrap();
        assert_eq!(get_video(video.id, &repo).unwrap_err(), ServiceError::NotFound);
        assert!(list_videos(&repo).unwrap().is_empty());

        restore_video(video.id, &repo).unwrap();
        let restored = get_video(video.id, &repo).unwrap();
        assert!(restored.is_active);
        assert_eq!(restored.title, video.title);
        assert_eq!(restored.youtube_code, video.youtube_code);
    }

    #[test]
    fn soft_delete_requires_an_active_target() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();

        soft_delete_video(video.id, &repo).unwrap();
        let err = soft_delete_video(video.id, &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn restore_of_active_video_is_a_no_op_success() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();

        let restored = restore_video(video.id, &repo).unwrap();

        assert_eq!(restored, video.id);
        assert!(get_video(video.id, &repo).unwrap().is_active);
    }

    #[test]
    fn restore_of_missing_video_is_not_found() {
        let repo = repo_with_category();

        let err = restore_video(VideoId::new(99).unwrap(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn partial_update_keeps_unset_fields_and_stamps_modification() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();

        let payload = UpdateVideoFormPayload {
            title: Some(VideoTitle::new("New Title").unwrap()),
            ..Default::default()
        };
        let updated = update_video(video.id, payload, &repo).unwrap();

        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.youtube_code, video.youtube_code);
        assert_eq!(updated.category_id, video.category_id);
        let modified = updated.date_last_modified.expect("should be stamped");
        assert!(modified > updated.date_created);
    }

    #[test]
    fn update_rejects_missing_target_category() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();

        let payload = UpdateVideoFormPayload {
            category_id: Some(CategoryId::new(9999).unwrap()),
            ..Default::default()
        };
        let err = update_video(video.id, payload, &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_rejects_inactive_target() {
        let repo = repo_with_category();
        let video = create_video(add_payload(), &repo).unwrap();
        soft_delete_video(video.id, &repo).unwrap();

        let err =
            update_video(video.id, UpdateVideoFormPayload::default(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }
}
