//! Business logic, kept free of HTTP concerns.
//!
//! Service functions are generic over the repository traits so they can be
//! unit-tested against the in-memory [`crate::repository::test::TestRepository`].

pub mod categories;
pub mod errors;
pub mod joins;
pub mod videos;

pub use errors::{ServiceError, ServiceResult};
