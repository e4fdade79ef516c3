//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users` - List every user
/// - `POST /users` - Create a user
/// - `GET /users/{id}` - Get a user by ID
/// - `PATCH /users/{id}` - Update a user
/// - `DELETE /users/{id}` - Delete a user
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Every request is
/// wrapped in a `tower-http` trace span.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, Duration::from_secs(5)));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Users API", description = "CRUD API for the users resource"), tags(
        (name = controller::user::USER_TAG, description = "User management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
