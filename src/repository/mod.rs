use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, VideoId};
use crate::domain::video::{CategorisedVideo, NewVideo, Video, VideoListing, VideoUpdate};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod video;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers. Every call checks out its own
/// connection, so each operation runs in its own short-lived transaction
/// scope and nothing is held across requests.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
///
/// `get_category_by_id` doubles as the existence predicate: absence is
/// reported as `Ok(None)` from a single fetch rather than a separate
/// exists-then-fetch pair.
pub trait CategoryReader {
    /// List all categories, unordered.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// True iff any category carries exactly this name (case-sensitive).
    fn category_name_exists(&self, name: &CategoryName) -> RepositoryResult<bool>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the created row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Rename a category, returning the number of affected rows.
    fn update_category(&self, id: CategoryId, name: &CategoryName) -> RepositoryResult<usize>;
    /// Hard-delete a category, returning the number of affected rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// List active videos ordered by creation time, oldest first.
    fn list_active_videos(&self) -> RepositoryResult<Vec<Video>>;
    /// Retrieve a video by its identifier regardless of state.
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
    /// Retrieve a video only if it exists and is active.
    fn get_active_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
    /// Count active videos referencing a category.
    fn count_active_videos(&self, category_id: CategoryId) -> RepositoryResult<i64>;
    /// Active videos joined to their category, ordered by category name
    /// then title.
    fn list_categorised_videos(&self) -> RepositoryResult<Vec<CategorisedVideo>>;
    /// Active videos joined to their category, ordered by title.
    fn list_active_video_listing(&self) -> RepositoryResult<Vec<VideoListing>>;
}

/// Write operations for video entities.
pub trait VideoWriter {
    /// Persist a new video and return the created row.
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video>;
    /// Write a merged field set onto a video, returning affected rows.
    fn update_video(&self, id: VideoId, update: &VideoUpdate) -> RepositoryResult<usize>;
    /// Flip the soft-delete flag and stamp the modification time.
    fn set_video_active(
        &self,
        id: VideoId,
        is_active: bool,
        modified_at: NaiveDateTime,
    ) -> RepositoryResult<usize>;
}
