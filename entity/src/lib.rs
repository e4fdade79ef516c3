//! SeaORM entities for the users service database.

pub mod prelude;

pub mod users;
