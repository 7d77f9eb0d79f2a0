use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, TypeConstraintError, VideoTitle, YoutubeCode};
use crate::domain::video::{NewVideo, VideoPatch};

/// Body of video create requests. Also the shape posted by the HTML add
/// and edit forms.
#[derive(Deserialize, Validate)]
pub struct AddVideoForm {
    #[validate(length(min = 3, max = 128))]
    pub title: String,
    #[validate(length(equal = 11))]
    pub youtube_code: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddVideoFormPayload {
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
}

impl AddVideoFormPayload {
    pub fn into_new_video(self, now: NaiveDateTime) -> NewVideo {
        NewVideo {
            title: self.title,
            youtube_code: self.youtube_code,
            category_id: self.category_id,
            date_created: now,
        }
    }
}

impl From<AddVideoFormPayload> for UpdateVideoFormPayload {
    fn from(value: AddVideoFormPayload) -> Self {
        Self {
            title: Some(value.title),
            youtube_code: Some(value.youtube_code),
            category_id: Some(value.category_id),
        }
    }
}

/// Body of video update requests. Absent fields keep their stored value.
#[derive(Deserialize, Validate)]
pub struct UpdateVideoForm {
    #[validate(length(min = 3, max = 128))]
    pub title: Option<String>,
    #[validate(length(equal = 11))]
    pub youtube_code: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateVideoFormPayload {
    pub title: Option<VideoTitle>,
    pub youtube_code: Option<YoutubeCode>,
    pub category_id: Option<CategoryId>,
}

impl UpdateVideoFormPayload {
    pub fn into_patch(self) -> VideoPatch {
        VideoPatch {
            title: self.title,
            youtube_code: self.youtube_code,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum VideoFormError {
    #[error("Video form validation failed: {0}")]
    Validation(String),
    #[error("Video form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for VideoFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for VideoFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddVideoForm> for AddVideoFormPayload {
    type Error = VideoFormError;

    fn try_from(value: AddVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            title: VideoTitle::new(value.title)?,
            youtube_code: YoutubeCode::new(value.youtube_code)?,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

impl TryFrom<UpdateVideoForm> for UpdateVideoFormPayload {
    type Error = VideoFormError;

    fn try_from(value: UpdateVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            title: value.title.map(VideoTitle::new).transpose()?,
            youtube_code: value.youtube_code.map(YoutubeCode::new).transpose()?,
            category_id: value.category_id.map(CategoryId::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_youtube_codes() {
        let result: Result<AddVideoFormPayload, _> = AddVideoForm {
            title: "A valid title".to_string(),
            youtube_code: "short".to_string(),
            category_id: 1,
        }
        .try_into();

        assert!(matches!(result, Err(VideoFormError::Validation(_))));
    }

    #[test]
    fn update_form_tolerates_absent_fields() {
        let payload: UpdateVideoFormPayload = UpdateVideoForm {
            title: Some("New Title".to_string()),
            youtube_code: None,
            category_id: None,
        }
        .try_into()
        .unwrap();

        assert_eq!(payload.title.as_ref().map(|t| t.as_str()), Some("New Title"));
        assert!(payload.youtube_code.is_none());
        assert!(payload.category_id.is_none());
    }

    #[test]
    fn whitespace_in_code_fails_type_constraint() {
        let result: Result<AddVideoFormPayload, _> = AddVideoForm {
            title: "A valid title".to_string(),
            youtube_code: "dQw4w 9WgXc".to_string(),
            category_id: 1,
        }
        .try_into();

        assert!(matches!(result, Err(VideoFormError::TypeConstraint(_))));
    }
}
