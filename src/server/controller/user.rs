use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{NewUserDto, UpdateUserDto, UserListDto, UserResponseDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "users";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, state.db_timeout);

    let users = user_service.list_users().await?;

    Ok((StatusCode::OK, Json(UserListDto { users })))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserResponseDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let user_service = UserService::new(&state.db, state.db_timeout);

    let user = user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(UserResponseDto { user })))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_user) = payload?;
    let user_service = UserService::new(&state.db, state.db_timeout);

    let user = user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto { user })))
}

/// Update the provided fields of a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponseDto),
        (status = 400, description = "Invalid user ID or fields", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let Json(update) = payload?;
    let user_service = UserService::new(&state.db, state.db_timeout);

    let user = user_service.update_user(user_id, update).await?;

    Ok((StatusCode::OK, Json(UserResponseDto { user })))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let user_service = UserService::new(&state.db, state.db_timeout);

    user_service.delete_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Deleted".to_string(),
        }),
    ))
}
