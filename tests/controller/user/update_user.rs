//! Tests for the update_user endpoint.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use users_api::{
    model::user::{UpdateUserDto, UserResponseDto},
    server::controller::user::update_user,
};

use super::*;

fn update(name: Option<&str>, user_type: Option<&str>) -> Result<Json<UpdateUserDto>, JsonRejection> {
    Ok(Json(UpdateUserDto {
        name: name.map(str::to_string),
        user_type: user_type.map(str::to_string),
    }))
}

/// Tests updating a single user.
///
/// Expected: Ok with 200 OK response, same ID, updated fields
#[tokio::test]
async fn updates_single_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let user_model = test.user().insert_mock_user().await?;

    let result = update_user(
        State(test.into_app_state()),
        Ok(Path(user_model.id)),
        update(Some("Billybob"), Some("admin")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserResponseDto = json_body(resp).await;
    assert_eq!(body.user.id, user_model.id);
    assert_eq!(body.user.name, "Billybob");
    assert_eq!(body.user.user_type, "admin");

    Ok(())
}

/// Tests that a partial update leaves other fields untouched.
///
/// Expected: Ok with 200 OK response and only `type` changed
#[tokio::test]
async fn updates_subset_of_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let user_model = test.user().insert_mock_user().await?;

    let result = update_user(
        State(test.into_app_state()),
        Ok(Path(user_model.id)),
        update(None, Some("staff")),
    )
    .await;

    let resp = result.unwrap().into_response();
    let body: UserResponseDto = json_body(resp).await;
    assert_eq!(body.user.name, MOCK_USER_NAME);
    assert_eq!(body.user.user_type, "staff");
    let stored = test.user().find_user(user_model.id).await?.unwrap();
    assert_eq!(stored.user_type, "staff");

    Ok(())
}

/// Tests updating an ID that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_table().build().await?;

    let result = update_user(
        State(test.into_app_state()),
        Ok(Path(0)),
        update(Some("Billybob"), Some("admin")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a blank field is rejected.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_blank_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let user_model = test.user().insert_mock_user().await?;

    let result = update_user(
        State(test.into_app_state()),
        Ok(Path(user_model.id)),
        update(Some("  "), None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
