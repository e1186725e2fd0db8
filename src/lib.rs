pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use modules::pets::{
    infrastructure::{OwnerRepositoryImpl, PetRepositoryImpl, VaccineRepositoryImpl},
    PetController,
};
use shared::errors::{AppError, AppResult};
use shared::Database;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Load the environment, initialize logging, connect the pool, run pending
/// migrations, and wire the controller against the real repositories.
pub fn bootstrap() -> AppResult<PetController> {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();

    let db = Arc::new(Database::new()?);
    run_migrations(&db)?;

    Ok(wire(db))
}

/// Wire a controller over an already-initialized database.
pub fn wire(db: Arc<Database>) -> PetController {
    PetController::new(
        Arc::new(PetRepositoryImpl::new(Arc::clone(&db))),
        Arc::new(OwnerRepositoryImpl::new(Arc::clone(&db))),
        Arc::new(VaccineRepositoryImpl::new(db)),
    )
}

fn run_migrations(db: &Database) -> AppResult<()> {
    let mut conn = db.get_connection()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;
    crate::log_info!("Database migrations completed");
    Ok(())
}
