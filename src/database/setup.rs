use log::info;
use rusqlite::Connection;

use crate::errors::Result;

const DROP_TABLES: [&str; 4] = [
    "DROP TABLE IF EXISTS queues",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS game_days",
    "DROP TABLE IF EXISTS teams",
];

/// Creates any missing tables and indexes. Existing data is kept.
pub fn initialize_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for statement in &statements {
        execute_sql(conn, statement)?;
    }

    info!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

/// Drops every table and recreates the schema.
pub fn reset_database(conn: &Connection) -> Result<()> {
    for statement in DROP_TABLES {
        execute_sql(conn, statement)?;
    }

    initialize_database(conn)?;
    info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])?;
    Ok(())
}
