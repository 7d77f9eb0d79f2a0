//! Core library exports for the video catalog service.
//!
//! This crate exposes the domain, models, repository, forms, routes and
//! service layers used by the catalog web application. The `data` feature
//! compiles only the persistence/domain layer; `server` adds the full
//! Actix-web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
