use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{CategorisedVideo, NewVideo, Video, VideoListing, VideoUpdate};
use crate::models::video::{
    NewVideo as DbNewVideo, Video as DbVideo, VideoUpdate as DbVideoUpdate,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VideoReader, VideoWriter};

impl VideoReader for DieselRepository {
    fn list_active_videos(&self) -> RepositoryResult<Vec<Video>> {
        use crate::schema::video;

        let mut conn = self.conn()?;

        let items = video::table
            .filter(video::is_active.eq(true))
            .order(video::date_created.asc())
            .load::<DbVideo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Video>, _>>()?;

        Ok(items)
    }

    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::video;

        let mut conn = self.conn()?;

        let item = video::table
            .filter(video::id.eq(id.get()))
            .first::<DbVideo>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }

    fn get_active_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::video;

        let mut conn = self.conn()?;

        let item = video::table
            .filter(video::id.eq(id.get()))
            .filter(video::is_active.eq(true))
            .first::<DbVideo>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }

    fn count_active_videos(&self, category_id: CategoryId) -> RepositoryResult<i64> {
        use crate::schema::video;

        let mut conn = self.conn()?;

        let total = video::table
            .filter(video::category_id.eq(category_id.get()))
            .filter(video::is_active.eq(true))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    fn list_categorised_videos(&self) -> RepositoryResult<Vec<CategorisedVideo>> {
        use crate::schema::{category, video};

        let mut conn = self.conn()?;

        let rows = video::table
            .inner_join(category::table)
            .filter(video::is_active.eq(true))
            .order((category::name.asc(), video::title.asc()))
            .select((category::name, video::title, video::youtube_code))
            .load::<(String, String, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(category_name, title, youtube_code)| CategorisedVideo {
                category_name,
                title,
                youtube_code,
            })
            .collect())
    }

    fn list_active_video_listing(&self) -> RepositoryResult<Vec<VideoListing>> {
        use crate::schema::{category, video};

        let mut conn = self.conn()?;

        let rows = video::table
            .inner_join(category::table)
            .filter(video::is_active.eq(true))
            .order(video::title.asc())
            .select((video::id, video::title, video::youtube_code, category::name))
            .load::<(i32, String, String, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, title, youtube_code, category_name)| VideoListing {
                id,
                title,
                youtube_code,
                category_name,
            })
            .collect())
    }
}

impl VideoWriter for DieselRepository {
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video> {
        use crate::schema::video;

        let mut conn = self.conn()?;
        let db_video: DbNewVideo = video.clone().into();

        let created = diesel::insert_into(video::table)
            .values(db_video)
            .get_result::<DbVideo>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_video(&self, id: VideoId, update: &VideoUpdate) -> RepositoryResult<usize> {
        use crate::schema::video;

        let mut conn = self.conn()?;
        let changes: DbVideoUpdate = update.clone().into();

        let affected = diesel::update(video::table.filter(video::id.eq(id.get())))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_video_active(
        &self,
        id: VideoId,
        is_active: bool,
        modified_at: NaiveDateTime,
    ) -> RepositoryResult<usize> {
        use crate::schema::video;

        let mut conn = self.conn()?;

        let affected = diesel::update(video::table.filter(video::id.eq(id.get())))
            .set((
                video::is_active.eq(is_active),
                video::date_last_modified.eq(Some(modified_at)),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
