use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::forms::categories::CategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter, VideoReader};

use super::{ServiceError, ServiceResult};

/// Return all categories, unordered.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

/// Fetch a single category; an absent row is the not-found condition.
pub fn get_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a category, rejecting duplicate names.
pub fn create_category<R>(payload: CategoryFormPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let exists = repo.category_name_exists(&payload.name).map_err(|e| {
        log::error!("Failed to check category name: {e}");
        ServiceError::Internal
    })?;
    if exists {
        return Err(ServiceError::Conflict);
    }

    repo.create_category(&payload.into_new_category())
        .map_err(|e| {
            log::error!("Failed to create category: {e}");
            ServiceError::Internal
        })
}

/// Rename a category and return the refreshed row.
///
/// The new name is not re-checked for uniqueness against other categories;
/// a rename is allowed to collide.
pub fn update_category<R>(
    id: CategoryId,
    payload: CategoryFormPayload,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    repo.update_category(id, &payload.name).map_err(|e| {
        log::error!("Failed to update category: {e}");
        ServiceError::Internal
    })?;

    get_category(id, repo)
}

/// Hard-delete a category, refusing while active videos still reference it.
pub fn delete_category<R>(id: CategoryId, repo: &R) -> ServiceResult<CategoryId>
where
    R: CategoryReader + CategoryWriter + VideoReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let referenced = repo.count_active_videos(id).map_err(|e| {
        log::error!("Failed to count videos for category: {e}");
        ServiceError::Internal
    })?;
    if referenced > 0 {
        return Err(ServiceError::Conflict);
    }

    repo.delete_category(id).map_err(|e| {
        log::error!("Failed to delete category: {e}");
        ServiceError::Internal
    })?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryName, VideoId, VideoTitle, YoutubeCode};
    use crate::domain::video::Video;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    fn sample_video(id: i32, category_id: i32, active: bool) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            title: VideoTitle::new("Some video").unwrap(),
            youtube_code: YoutubeCode::new("dQw4w9WgXcQ").unwrap(),
            category_id: CategoryId::new(category_id).unwrap(),
            is_active: active,
            date_created: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            date_last_modified: None,
        }
    }

    fn payload(name: &str) -> CategoryFormPayload {
        CategoryFormPayload {
            name: CategoryName::new(name).unwrap(),
        }
    }

    #[test]
    fn created_category_is_returned_by_get() {
        let repo = TestRepository::new();

        let created = create_category(payload("Music"), &repo).unwrap();
        let fetched = get_category(created.id, &repo).unwrap();

        assert_eq!(created, fetched);
        assert!(created.id.get() > 0);
    }

    #[test]
    fn duplicate_name_is_a_conflict() {
        let repo = TestRepository::new();

        create_category(payload("Music"), &repo).unwrap();
        let err = create_category(payload("Music"), &repo).unwrap_err();

        assert_eq!(err, ServiceError::Conflict);
    }

    #[test]
    fn get_missing_category_is_not_found() {
        let repo = TestRepository::new();

        let err = get_category(CategoryId::new(42).unwrap(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_returns_refreshed_row_without_uniqueness_check() {
        let repo = TestRepository::new()
            .with_categories(vec![sample_category(1, "Music"), sample_category(2, "Gaming")]);

        // Renaming onto an existing name is allowed.
        let updated =
            update_category(CategoryId::new(2).unwrap(), payload("Music"), &repo).unwrap();

        assert_eq!(updated.name.as_str(), "Music");
        assert_eq!(updated.id, 2);
    }

    #[test]
    fn update_missing_category_is_not_found() {
        let repo = TestRepository::new();

        let err =
            update_category(CategoryId::new(7).unwrap(), payload("Music"), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_is_blocked_by_active_videos() {
        let repo = TestRepository::new()
            .with_categories(vec![sample_category(1, "Music")])
            .with_videos(vec![sample_video(1, 1, true)]);

        let err = delete_category(CategoryId::new(1).unwrap(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::Conflict);
    }

    #[test]
    fn delete_succeeds_once_videos_are_soft_deleted() {
        let repo = TestRepository::new()
            .with_categories(vec![sample_category(1, "Music")])
            .with_videos(vec![sample_video(1, 1, false)]);

        let deleted = delete_category(CategoryId::new(1).unwrap(), &repo).unwrap();

        assert_eq!(deleted, 1);
        assert!(list_categories(&repo).unwrap().is_empty());
    }
}
