use std::time::Duration;

use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The database connection is a pool owned by the process; handlers borrow it for a single
/// round trip and never manage its lifecycle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Upper bound for a single database round trip
    pub db_timeout: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, db_timeout: Duration) -> Self {
        Self { db, db_timeout }
    }
}
