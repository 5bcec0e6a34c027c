use rusqlite::{params, Connection};

use crate::domain::{GameDayId, TeamId};
use crate::errors::Result;

/// Queued team ids of a game day, front first
pub fn list_team_ids(conn: &Connection, game_day_id: GameDayId) -> Result<Vec<TeamId>> {
    let mut stmt = conn.prepare("SELECT team_id FROM queues WHERE game_day_id = ?1 ORDER BY position, rowid")?;
    let ids = stmt
        .query_map(params![game_day_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<TeamId>>>()?;

    Ok(ids)
}

/// Rewrites the whole queue of a game day. An empty slice clears it.
pub fn replace_all(conn: &Connection, game_day_id: GameDayId, team_ids: &[TeamId]) -> Result<()> {
    conn.execute("DELETE FROM queues WHERE game_day_id = ?1", params![game_day_id])?;

    let mut stmt = conn.prepare("INSERT INTO queues (game_day_id, team_id, position) VALUES (?1, ?2, ?3)")?;
    for (position, team_id) in team_ids.iter().enumerate() {
        stmt.execute(params![game_day_id, team_id, position as i64])?;
    }
    Ok(())
}

pub fn remove_team(conn: &Connection, game_day_id: GameDayId, team_id: TeamId) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM queues WHERE game_day_id = ?1 AND team_id = ?2",
        params![game_day_id, team_id],
    )?;
    Ok(changed == 1)
}
