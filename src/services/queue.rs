use std::collections::HashSet;

use log::info;
use rusqlite::{Connection, TransactionBehavior};

use crate::database::{self, DbPool};
use crate::domain::{GameDay, GameDayId, TeamId, TeamQueue};
use crate::errors::{LeagueError, Result};

/// Hand-ordered line of teams waiting to play on a game day.
///
/// Reading works on any day; changes are only accepted while the day is open.
pub struct QueueService {
    pool: DbPool,
}

impl QueueService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The day's queue, empty until teams are added.
    pub fn get_queue(&self, game_day_id: GameDayId) -> Result<TeamQueue> {
        let conn = database::get_connection(&self.pool)?;
        load_game_day(&conn, game_day_id)?;
        load_queue(&conn, game_day_id)
    }

    /// Appends teams to the back of the line, skipping those already in it.
    pub fn add_teams(&self, game_day_id: GameDayId, team_ids: &[TeamId]) -> Result<TeamQueue> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_open(&tx, game_day_id)?;
        ensure_teams_exist(&tx, team_ids)?;

        let mut queue = load_queue(&tx, game_day_id)?;
        let added = queue.push_new(team_ids);
        database::queues::replace_all(&tx, game_day_id, &queue.team_ids)?;
        tx.commit()?;

        info!("Queued {} teams on game day {}", added, game_day_id);
        Ok(queue)
    }

    pub fn remove_team(&self, game_day_id: GameDayId, team_id: TeamId) -> Result<TeamQueue> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_open(&tx, game_day_id)?;
        if !database::queues::remove_team(&tx, game_day_id, team_id)? {
            return Err(LeagueError::not_found("Queued team", team_id));
        }
        let queue = load_queue(&tx, game_day_id)?;
        tx.commit()?;

        info!("Removed team {} from the queue of game day {}", team_id, game_day_id);
        Ok(queue)
    }

    /// Replaces the line with `team_ids` in the given order. An empty list
    /// clears the queue.
    pub fn set_order(&self, game_day_id: GameDayId, team_ids: &[TeamId]) -> Result<TeamQueue> {
        let mut seen = HashSet::with_capacity(team_ids.len());
        if let Some(dup) = team_ids.iter().find(|&&id| !seen.insert(id)) {
            return Err(LeagueError::DuplicateTeam(*dup));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_open(&tx, game_day_id)?;
        ensure_teams_exist(&tx, team_ids)?;
        database::queues::replace_all(&tx, game_day_id, team_ids)?;
        tx.commit()?;

        info!("Reordered the queue of game day {} ({} teams)", game_day_id, team_ids.len());
        Ok(TeamQueue {
            game_day_id,
            team_ids: team_ids.to_vec(),
        })
    }

    pub fn clear(&self, game_day_id: GameDayId) -> Result<TeamQueue> {
        self.set_order(game_day_id, &[])
    }
}

fn load_queue(conn: &Connection, game_day_id: GameDayId) -> Result<TeamQueue> {
    Ok(TeamQueue {
        game_day_id,
        team_ids: database::queues::list_team_ids(conn, game_day_id)?,
    })
}

fn load_game_day(conn: &Connection, id: GameDayId) -> Result<GameDay> {
    database::game_days::find_by_id(conn, id)?.ok_or_else(|| LeagueError::not_found("Game day", id))
}

fn ensure_open(conn: &Connection, id: GameDayId) -> Result<()> {
    if !load_game_day(conn, id)?.is_open {
        return Err(LeagueError::GameDayClosed(id));
    }
    Ok(())
}

fn ensure_teams_exist(conn: &Connection, team_ids: &[TeamId]) -> Result<()> {
    for &id in team_ids {
        if database::teams::find_by_id(conn, id)?.is_none() {
            return Err(LeagueError::not_found("Team", id));
        }
    }
    Ok(())
}
