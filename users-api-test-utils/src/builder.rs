//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! All operations are queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// user rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    include_user_table: bool,
    users: Vec<(String, String)>, // (name, user_type)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_user_table: false,
            users: Vec::new(),
        }
    }

    /// Add the `users` table to the test database.
    pub fn with_user_table(mut self) -> Self {
        self.include_user_table = true;
        self
    }

    /// Insert a user row during `build()`.
    ///
    /// Implies `with_user_table`.
    ///
    /// # Arguments
    /// - `name` - Name of the user
    /// - `user_type` - Type label of the user
    pub fn with_user(mut self, name: &str, user_type: &str) -> Self {
        self.include_user_table = true;
        self.users.push((name.to_string(), user_type.to_string()));
        self
    }

    /// Execute all queued setup and return the test context.
    ///
    /// Tables are created first, then user rows are inserted in the order they were queued,
    /// so the generated IDs increase in that order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        if self.include_user_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![schema.create_table_from_entity(entity::prelude::Users)])
                .await?;
        }

        for (name, user_type) in self.users {
            setup.user().insert_user(&name, &user_type).await?;
        }

        Ok(setup)
    }
}
