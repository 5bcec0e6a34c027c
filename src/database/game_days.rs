use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::GAME_DAY_COLUMNS;
use crate::domain::GameDay;
use crate::errors::Result;

pub fn insert_game_day(conn: &Connection, game_day: &GameDay) -> Result<GameDay> {
    let sql = format!(
        "INSERT INTO game_days (id, date, description, is_open, match_duration_minutes) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {GAME_DAY_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            game_day.id,
            game_day.date,
            game_day.description,
            game_day.is_open,
            game_day.match_duration_minutes
        ],
        parse_game_day_row,
    )?;
    Ok(inserted)
}

fn parse_game_day_row(row: &rusqlite::Row) -> rusqlite::Result<GameDay> {
    Ok(GameDay {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        is_open: row.get(3)?,
        match_duration_minutes: row.get(4)?,
        champion_id: row.get(5)?,
        closed_at: row.get(6)?,
        final_standings: row.get(7)?,
        created_at: row.get(8)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<GameDay>> {
    let sql = format!("SELECT {GAME_DAY_COLUMNS} FROM game_days WHERE id = ?1");

    Ok(conn.query_row(&sql, params![id], parse_game_day_row).optional()?)
}

pub fn find_open(conn: &Connection) -> Result<Option<GameDay>> {
    let sql = format!("SELECT {GAME_DAY_COLUMNS} FROM game_days WHERE is_open = 1 LIMIT 1");

    Ok(conn.query_row(&sql, [], parse_game_day_row).optional()?)
}

/// Newest first
pub fn list_all(conn: &Connection) -> Result<Vec<GameDay>> {
    let sql = format!("SELECT {GAME_DAY_COLUMNS} FROM game_days ORDER BY date DESC, rowid DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_game_day_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Flips an open day to closed. Returns false if it was not open any more.
pub fn close_game_day(
    conn: &Connection,
    id: Uuid,
    champion_id: Option<Uuid>,
    closed_at: NaiveDateTime,
    final_standings: &str,
) -> Result<bool> {
    let sql = "UPDATE game_days SET is_open = 0, champion_id = ?1, closed_at = ?2, final_standings = ?3 WHERE id = ?4 AND is_open = 1";

    let changed = conn.execute(sql, params![champion_id, closed_at, final_standings, id])?;
    Ok(changed == 1)
}

pub fn delete_game_day(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn.execute("DELETE FROM game_days WHERE id = ?1", params![id])?;
    Ok(changed == 1)
}
