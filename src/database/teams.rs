use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::TEAM_COLUMNS;
use crate::domain::Team;
use crate::errors::Result;

pub fn insert_team(conn: &Connection, team: &Team) -> Result<Team> {
    let sql = format!(
        "INSERT INTO teams (id, name, primary_color, secondary_color, points, goals_scored, goals_conceded) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {TEAM_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            team.id,
            team.name,
            team.primary_color,
            team.secondary_color,
            team.points,
            team.goals_scored,
            team.goals_conceded
        ],
        parse_team_row,
    )?;
    Ok(inserted)
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
        primary_color: row.get(2)?,
        secondary_color: row.get(3)?,
        points: row.get(4)?,
        goals_scored: row.get(5)?,
        goals_conceded: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Team>> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?1");

    Ok(conn.query_row(&sql, params![id], parse_team_row).optional()?)
}

/// Every team ordered by name; ties broken by insertion order.
pub fn list_all(conn: &Connection) -> Result<Vec<Team>> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY name ASC, rowid ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Writes the cumulative totals of `team`. Returns false when the row is gone.
pub fn update_totals(conn: &Connection, team: &Team) -> Result<bool> {
    let sql = "UPDATE teams SET points = ?1, goals_scored = ?2, goals_conceded = ?3 WHERE id = ?4";

    let changed = conn.execute(
        sql,
        params![team.points, team.goals_scored, team.goals_conceded, team.id],
    )?;
    Ok(changed == 1)
}

pub fn reset_all_totals(conn: &Connection) -> Result<usize> {
    let sql = "UPDATE teams SET points = 0, goals_scored = 0, goals_conceded = 0";
    Ok(conn.execute(sql, [])?)
}

pub fn delete_team(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn.execute("DELETE FROM teams WHERE id = ?1", params![id])?;
    Ok(changed == 1)
}
