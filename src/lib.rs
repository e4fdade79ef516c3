//! REST CRUD service exposing a single `users` resource.
//!
//! The [`model`] module holds the JSON shapes shared by handlers and tests, while
//! [`server`] contains the HTTP layer, business logic, and data access.

pub mod model;
pub mod server;
