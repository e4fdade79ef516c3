use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, the ID is assigned by the database
    pub async fn create(
        &self,
        name: String,
        user_type: String,
    ) -> Result<entity::users::Model, DbErr> {
        let user = entity::users::ActiveModel {
            name: ActiveValue::Set(name),
            user_type: ActiveValue::Set(user_type),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .order_by_asc(entity::users::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Applies the provided fields to an existing user
    ///
    /// Fields set to `None` are left untouched. Returns `Ok(None)` if the user does not
    /// exist. Run this within a transaction when the read and write must be atomic.
    pub async fn update(
        &self,
        user_id: i32,
        name: Option<String>,
        user_type: Option<String>,
    ) -> Result<Option<entity::users::Model>, DbErr> {
        let user = match entity::prelude::Users::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        if name.is_none() && user_type.is_none() {
            return Ok(Some(user));
        }

        let mut user_am = user.into_active_model();
        if let Some(name) = name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(user_type) = user_type {
            user_am.user_type = ActiveValue::Set(user_type);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Users::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Deletes every user, used to reset state between test scenarios
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Users::delete_many().exec(self.db).await
    }
}
