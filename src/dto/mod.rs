//! DTOs shaped for the list screens and the JSON API.

pub mod api;
pub mod list;
