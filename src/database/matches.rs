use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::MATCH_COLUMNS;
use crate::domain::{Match, MatchStatus};
use crate::errors::Result;

pub fn insert_match(conn: &Connection, m: &Match) -> Result<Match> {
    let sql = format!(
        "INSERT INTO matches (id, game_day_id, team1_id, team2_id, status, goals_team1, goals_team2) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {MATCH_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            m.id,
            m.game_day_id,
            m.team1_id,
            m.team2_id,
            m.status,
            m.goals_team1,
            m.goals_team2
        ],
        parse_match_row,
    )?;
    Ok(inserted)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        game_day_id: row.get(1)?,
        team1_id: row.get(2)?,
        team2_id: row.get(3)?,
        status: row.get(4)?,
        goals_team1: row.get(5)?,
        goals_team2: row.get(6)?,
        started_at: row.get(7)?,
        ended_at: row.get(8)?,
        actual_duration_minutes: row.get(9)?,
        created_at: row.get(10)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1");

    Ok(conn.query_row(&sql, params![id], parse_match_row).optional()?)
}

fn query_matches(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Match>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY created_at ASC, rowid ASC");
    query_matches(conn, &sql, [])
}

/// Matches of one game day in creation order
pub fn list_by_game_day(conn: &Connection, game_day_id: Uuid) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE game_day_id = ?1 ORDER BY created_at ASC, rowid ASC"
    );
    query_matches(conn, &sql, params![game_day_id])
}

pub fn list_finished(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE status = ?1 ORDER BY rowid ASC");
    query_matches(conn, &sql, params![MatchStatus::Finished])
}

pub fn list_finished_by_game_day(conn: &Connection, game_day_id: Uuid) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE status = ?1 AND game_day_id = ?2 ORDER BY rowid ASC"
    );
    query_matches(conn, &sql, params![MatchStatus::Finished, game_day_id])
}

pub fn count_by_game_day(conn: &Connection, game_day_id: Uuid) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM matches WHERE game_day_id = ?1";
    Ok(conn.query_row(sql, params![game_day_id], |row| row.get(0))?)
}

pub fn count_by_status(conn: &Connection, game_day_id: Uuid, status: MatchStatus) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM matches WHERE game_day_id = ?1 AND status = ?2";
    Ok(conn.query_row(sql, params![game_day_id, status], |row| row.get(0))?)
}

/// Kicks off a scheduled match. Returns false if it was not scheduled.
pub fn mark_started(conn: &Connection, id: Uuid, started_at: NaiveDateTime) -> Result<bool> {
    let sql = "UPDATE matches SET status = ?1, started_at = ?2 WHERE id = ?3 AND status = ?4";

    let changed = conn.execute(
        sql,
        params![MatchStatus::InProgress, started_at, id, MatchStatus::Scheduled],
    )?;
    Ok(changed == 1)
}

/// Live score update; the match is in progress from then on.
pub fn update_goals(conn: &Connection, id: Uuid, goals_team1: u32, goals_team2: u32) -> Result<bool> {
    let sql = "UPDATE matches SET goals_team1 = ?1, goals_team2 = ?2, status = ?3 WHERE id = ?4 AND status <> ?5";

    let changed = conn.execute(
        sql,
        params![goals_team1, goals_team2, MatchStatus::InProgress, id, MatchStatus::Finished],
    )?;
    Ok(changed == 1)
}

/// Status-guarded move to `finished`. Returns false when the match was
/// already finished, so a second concurrent finish cannot credit teams again.
pub fn mark_finished(
    conn: &Connection,
    id: Uuid,
    goals_team1: u32,
    goals_team2: u32,
    ended_at: NaiveDateTime,
    actual_duration_minutes: Option<f64>,
) -> Result<bool> {
    let sql = "UPDATE matches SET status = ?1, goals_team1 = ?2, goals_team2 = ?3, ended_at = ?4, actual_duration_minutes = ?5 WHERE id = ?6 AND status <> ?1";

    let changed = conn.execute(
        sql,
        params![
            MatchStatus::Finished,
            goals_team1,
            goals_team2,
            ended_at,
            actual_duration_minutes,
            id
        ],
    )?;
    Ok(changed == 1)
}

pub fn delete_match(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn.execute("DELETE FROM matches WHERE id = ?1", params![id])?;
    Ok(changed == 1)
}
