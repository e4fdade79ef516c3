//! Shared test fixtures for the users service.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and rows a test
//! needs, and `build()` returns a [`TestContext`] backed by a fresh in-memory SQLite
//! database. Every test therefore starts from an isolated, reset storage state.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{MOCK_USER_NAME, MOCK_USER_TYPE},
        TestBuilder, TestContext, TestError,
    };
}
