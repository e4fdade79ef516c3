use serde::{Deserialize, Serialize};

/// A user as returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl From<entity::users::Model> for UserDto {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            user_type: model.user_type,
        }
    }
}

/// Response body wrapping a single user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

/// Response body wrapping every current user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

/// Request body for creating a user
///
/// Both fields are required; they are optional here so that a missing field is
/// reported as a validation error instead of a deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewUserDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

/// Request body for updating a user, only provided fields are applied
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}
