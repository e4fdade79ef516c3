//! Tests for the create_user endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use users_api::{
    model::{
        api::ErrorDto,
        user::{NewUserDto, UserResponseDto},
    },
    server::controller::user::create_user,
};

use super::*;

fn new_user(name: Option<&str>, user_type: Option<&str>) -> Result<Json<NewUserDto>, JsonRejection> {
    Ok(Json(NewUserDto {
        name: name.map(str::to_string),
        user_type: user_type.map(str::to_string),
    }))
}

/// Tests creating a single user.
///
/// Expected: Ok with 201 CREATED response containing the assigned ID
#[tokio::test]
async fn creates_single_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let existing = test.user().insert_mock_user().await?;

    let result = create_user(
        State(test.into_app_state()),
        new_user(Some("Billybob"), Some("admin")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: UserResponseDto = json_body(resp).await;
    assert_ne!(body.user.id, existing.id);
    assert_eq!(body.user.name, "Billybob");
    assert_eq!(body.user.user_type, "admin");
    let stored = test.user().find_user(body.user.id).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a missing field is rejected before any insert.
///
/// Expected: Err with 400 BAD_REQUEST response and no row stored
#[tokio::test]
async fn bad_request_for_missing_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;

    let result = create_user(State(test.into_app_state()), new_user(Some("Billybob"), None)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Missing required field: type");
    assert_eq!(test.user().count_users().await?, 0);

    Ok(())
}

/// Tests that a blank field is rejected.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_blank_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_table().build().await?;

    let result = create_user(State(test.into_app_state()), new_user(Some(""), Some("admin"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        new_user(Some("Billybob"), Some("admin")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Tests creating users concurrently from separate tasks sharing one state.
///
/// Expected: every request returns 201 with a distinct ID and every row is stored
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_table().build().await?;
    let state = test.into_app_state();

    let mut requests = tokio::task::JoinSet::new();
    for i in 0..8 {
        let state = state.clone();
        requests.spawn(async move {
            let name = format!("User {}", i);
            let result = create_user(State(state), new_user(Some(&name), Some("admin"))).await;

            result.unwrap().into_response()
        });
    }

    let mut ids = Vec::new();
    while let Some(resp) = requests.join_next().await {
        let resp = resp.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: UserResponseDto = json_body(resp).await;
        ids.push(body.user.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(test.user().count_users().await?, 8);

    Ok(())
}
