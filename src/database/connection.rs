use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::Result;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(manager, None)
}

/// Single-connection in-memory pool. Every connection of a memory manager is
/// its own database, so the pool must never hand out a second one.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());
    build_pool(manager, Some(1))
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(Duration::from_secs(5))
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: Option<u32>) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder();
    if let Some(size) = max_size {
        // Keep the lone connection alive for the life of the pool
        builder = builder.max_size(size).idle_timeout(None).max_lifetime(None);
    }
    Ok(builder.build(manager)?)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    Ok(pool.get()?)
}
