//! Diesel row structs mirroring the database schema.

pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod video;
