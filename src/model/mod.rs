//! JSON request and response shapes for the users API.

pub mod api;
pub mod user;
