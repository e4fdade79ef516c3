//! Server application core modules.
//!
//! This module contains the server-side functionality for the users service: HTTP routing,
//! controllers, business logic, database access, configuration, and process startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
