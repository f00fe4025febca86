//! Infrastructure: SQLite connection, migrations, seeding, repositories.

pub mod db;
pub mod repo;
pub mod seed;

pub use db::{init_db, Database};
pub use seed::{InitialData, SeedExercise, SeedReport};
