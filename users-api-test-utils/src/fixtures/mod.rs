//! Test fixture modules for database row creation.
//!
//! - `user` - rows of the `users` table

pub mod user;
