//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler.

pub mod app;
