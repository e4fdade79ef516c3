//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each method issues
//! a single statement against the database and leaves business rules to the service layer.

pub mod user;
