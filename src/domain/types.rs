//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a YouTube video code.
pub const YOUTUBE_CODE_LEN: usize = 11;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string fell outside its allowed character length range.
    #[error("{field} must be between {min} and {max} characters")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
    /// A YouTube code was not exactly eleven non-whitespace characters.
    #[error("youtube code must be exactly {YOUTUBE_CODE_LEN} non-whitespace characters")]
    InvalidYoutubeCode,
}

fn trim_and_check_length(
    value: String,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim().to_string();
    let len = trimmed.chars().count();
    if len < min || len > max {
        Err(TypeConstraintError::LengthOutOfRange { field, min, max })
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Macro to generate newtypes for trimmed strings with length bounds.
macro_rules! bounded_string_newtype {
    ($name:ident, $doc:expr, $field:expr, $min:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed value within the allowed length range.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_check_length(value.into(), $field, $min, $max).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.", "category_id");
id_newtype!(VideoId, "Unique identifier for a video.", "video_id");

bounded_string_newtype!(
    CategoryName,
    "Category display name, 3 to 15 characters.",
    "category name",
    3,
    15
);
bounded_string_newtype!(
    VideoTitle,
    "Video title, 3 to 128 characters.",
    "video title",
    3,
    128
);

/// Eleven-character YouTube video code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct YoutubeCode(String);

impl YoutubeCode {
    /// Constructs a code that is exactly eleven non-whitespace characters.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if value.chars().count() == YOUTUBE_CODE_LEN
            && !value.chars().any(|c| c.is_whitespace())
        {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidYoutubeCode)
        }
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned code.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for YoutubeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for YoutubeCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for YoutubeCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for YoutubeCode {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YoutubeCode> for String {
    fn from(value: YoutubeCode) -> Self {
        value.0
    }
}

impl PartialEq<&str> for YoutubeCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_names() {
        let name = CategoryName::new("  Music  ").unwrap();
        assert_eq!(name.as_str(), "Music");
    }

    #[test]
    fn rejects_category_names_outside_bounds() {
        assert_eq!(
            CategoryName::new("AB").unwrap_err(),
            TypeConstraintError::LengthOutOfRange {
                field: "category name",
                min: 3,
                max: 15,
            }
        );
        assert!(CategoryName::new("ABC").is_ok());
        assert!(CategoryName::new("A".repeat(16)).is_err());
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = VideoId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("video_id"));
    }

    #[test]
    fn accepts_eleven_character_codes() {
        let code = YoutubeCode::new("dQw4w9WgXcQ").unwrap();
        assert_eq!(code.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(
            YoutubeCode::new("short").unwrap_err(),
            TypeConstraintError::InvalidYoutubeCode
        );
        assert!(YoutubeCode::new("dQw4w 9WgXc").is_err());
        assert!(YoutubeCode::new("dQw4w9WgXcQQ").is_err());
    }
}
