//! Domain entities and the value objects they are built from.

pub mod category;
pub mod types;
pub mod video;
