//! User service layer.
//!
//! This module contains the business logic for the users resource: input validation,
//! not-found detection, and transactional updates on top of [`UserRepository`].


use std::{future::Future, time::Duration};

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::user::{NewUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
    },
};

/// Service for managing the users resource.
///
/// Every operation issues at most one database round trip (update uses a single
/// transaction) and fails with [`Error::DatabaseTimeout`] if it does not complete in time.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `timeout` - Upper bound for each database round trip
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Retrieves every user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All current users, empty if there are none
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::DatabaseTimeout)` - Database did not respond in time
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = self.bounded("list users", user_repo.get_all()).await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::DatabaseTimeout)` - Database did not respond in time
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = self
            .bounded(&format!("get user ID {}", user_id), user_repo.get_by_id(user_id))
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user.into())
    }

    /// Creates a new user.
    ///
    /// Both `name` and `type` are required and must contain a non-whitespace character.
    /// Accepted values are stored exactly as sent.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Created user including its database assigned ID
    /// - `Err(Error::UserError(_))` - A field is missing or blank
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::DatabaseTimeout)` - Database did not respond in time
    pub async fn create_user(&self, new_user: NewUserDto) -> Result<UserDto, Error> {
        let name = required_field(new_user.name, "name")?;
        let user_type = required_field(new_user.user_type, "type")?;

        let user_repo = UserRepository::new(self.db);
        let user = self
            .bounded("create user", user_repo.create(name, user_type))
            .await?;

        tracing::debug!(user_id = %user.id, "Created user");

        Ok(user.into())
    }

    /// Applies the provided fields to an existing user.
    ///
    /// The lookup and the write run in one transaction so a concurrent delete cannot
    /// interleave between them. An empty update returns the user unchanged.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated user, ID unchanged
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with that ID
    /// - `Err(Error::UserError(UserError::EmptyField))` - A provided field is blank
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::DatabaseTimeout)` - Database did not respond in time
    pub async fn update_user(&self, user_id: i32, update: UpdateUserDto) -> Result<UserDto, Error> {
        let name = update
            .name
            .map(|name| non_empty_field(name, "name"))
            .transpose()?;
        let user_type = update
            .user_type
            .map(|user_type| non_empty_field(user_type, "type"))
            .transpose()?;

        let db = self.db;
        let user = self
            .bounded(&format!("update user ID {}", user_id), async move {
                let txn = db.begin().await?;
                let user = UserRepository::new(&txn)
                    .update(user_id, name, user_type)
                    .await?;
                txn.commit().await?;

                Ok::<_, DbErr>(user)
            })
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        tracing::debug!(user_id = %user.id, "Updated user");

        Ok(user.into())
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::DatabaseTimeout)` - Database did not respond in time
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let result = self
            .bounded(&format!("delete user ID {}", user_id), user_repo.delete(user_id))
            .await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        tracing::debug!(user_id = %user_id, "Deleted user");

        Ok(())
    }

    /// Runs a database round trip, failing if it exceeds the configured timeout.
    async fn bounded<T, F>(&self, description: &str, operation: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(Error::DatabaseTimeout(format!(
                "{} exceeded {:?}",
                description, self.timeout
            ))),
        }
    }
}

fn required_field(value: Option<String>, field: &'static str) -> Result<String, UserError> {
    let value = value.ok_or(UserError::MissingField(field))?;

    non_empty_field(value, field)
}

fn non_empty_field(value: String, field: &'static str) -> Result<String, UserError> {
    if value.trim().is_empty() {
        return Err(UserError::EmptyField(field));
    }

    Ok(value)
}
