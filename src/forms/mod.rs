//! Request payloads and their conversions into domain-typed values.
//!
//! Each raw form derives `Deserialize` and `Validate`; a `TryFrom`
//! conversion then lifts it into a payload struct built from domain
//! newtypes, so anything past the route boundary is already validated.

pub mod categories;
pub mod videos;
