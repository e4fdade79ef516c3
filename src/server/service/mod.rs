//! Service layer for business logic.
//!
//! Services validate input, bound every database round trip with the configured timeout,
//! and translate missing rows into not-found errors for the controllers.

pub mod user;
