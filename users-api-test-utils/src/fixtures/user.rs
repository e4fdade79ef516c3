use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    constant::{MOCK_USER_NAME, MOCK_USER_TYPE},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user row directly, bypassing the service layer
    pub async fn insert_user(
        &self,
        name: &str,
        user_type: &str,
    ) -> Result<entity::users::Model, TestError> {
        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_type: ActiveValue::Set(user_type.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the standard `('Peanut', 'admin')` user
    pub async fn insert_mock_user(&self) -> Result<entity::users::Model, TestError> {
        self.insert_user(MOCK_USER_NAME, MOCK_USER_TYPE).await
    }

    /// Look up a user row directly by ID
    pub async fn find_user(&self, user_id: i32) -> Result<Option<entity::users::Model>, TestError> {
        Ok(entity::prelude::Users::find_by_id(user_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Count every row in the `users` table
    pub async fn count_users(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Users::find()
            .count(&self.setup.db)
            .await?)
    }
}
