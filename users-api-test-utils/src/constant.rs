//! Fixture values shared across tests.

/// Name of the user inserted by [`crate::fixtures::user::UserFixtures::insert_mock_user`].
pub static MOCK_USER_NAME: &str = "Peanut";

/// Type of the user inserted by [`crate::fixtures::user::UserFixtures::insert_mock_user`].
pub static MOCK_USER_TYPE: &str = "admin";
