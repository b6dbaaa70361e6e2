use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a database (new or existing) up to the current schema.
/// All table creation lives in the migration engine, so this is safe to run
/// against a populated `dems.db`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
