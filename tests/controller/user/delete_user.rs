//! Tests for the delete_user endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use users_api::{model::api::MessageDto, server::controller::user::delete_user};

use super::*;

/// Tests deleting a single user.
///
/// Expected: Ok with 200 OK response and the row removed from storage
#[tokio::test]
async fn deletes_single_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let user_model = test.user().insert_mock_user().await?;

    let result = delete_user(State(test.into_app_state()), Ok(Path(user_model.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "Deleted");
    // Confirm the user was deleted
    let check = test.user().find_user(user_model.id).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an ID that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and no rows removed
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    test.user().insert_mock_user().await?;

    let result = delete_user(State(test.into_app_state()), Ok(Path(0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test.user().count_users().await?, 1);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = delete_user(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
