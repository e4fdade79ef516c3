//! HTTP controller endpoints for the users API.
//!
//! Controllers extract path parameters and JSON bodies, delegate to the service layer,
//! and wrap results in the response envelopes expected by API consumers. They use utoipa
//! for OpenAPI documentation.

pub mod user;
