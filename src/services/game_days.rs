use chrono::{NaiveDateTime, Utc};
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use uuid::Uuid;

use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::validation::{validate_description, validate_match_duration};
use crate::domain::{GameDay, Match, MatchStatus, TeamId};
use crate::errors::{LeagueError, Result};
use crate::standings::{self, FinalStandings, Scope, TeamStanding};

/// A game day with its matches in creation order
#[derive(Debug, Clone)]
pub struct GameDayDetail {
    pub game_day: GameDay,
    pub matches: Vec<Match>,
}

pub struct GameDayService {
    pool: DbPool,
    config: AppConfig,
}

impl GameDayService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Opens a new game day dated now. Only one may be open at a time.
    pub fn start_game_day(&self, match_duration_minutes: Option<u32>) -> Result<GameDay> {
        let duration = validate_match_duration(
            match_duration_minutes.unwrap_or(self.config.game_day.default_match_duration),
            &self.config.game_day,
        )?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if let Some(open) = database::game_days::find_open(&tx)? {
            return Err(LeagueError::GameDayAlreadyOpen(open.id));
        }

        let game_day = database::game_days::insert_game_day(
            &tx,
            &new_game_day(Utc::now().naive_utc(), None, true, duration),
        )?;
        tx.commit()?;

        info!("Started game day {} ({} minute matches)", game_day.id, duration);
        Ok(game_day)
    }

    /// Records a past game day. Manually created days start closed.
    pub fn create_game_day(
        &self,
        date: NaiveDateTime,
        description: Option<&str>,
        match_duration_minutes: Option<u32>,
    ) -> Result<GameDay> {
        let description = validate_description(description)?;
        let duration = validate_match_duration(
            match_duration_minutes.unwrap_or(self.config.game_day.default_match_duration),
            &self.config.game_day,
        )?;

        let conn = database::get_connection(&self.pool)?;
        let game_day =
            database::game_days::insert_game_day(&conn, &new_game_day(date, description, false, duration))?;

        info!("Created game day {} for {}", game_day.id, game_day.date);
        Ok(game_day)
    }

    /// Closes an open game day, crowning the champion and storing the final table.
    pub fn close_game_day(&self, id: Uuid) -> Result<GameDay> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let game_day = database::game_days::find_by_id(&tx, id)?
            .ok_or_else(|| LeagueError::not_found("Game day", id))?;
        if !game_day.is_open {
            return Err(LeagueError::GameDayClosed(id));
        }

        let in_progress = database::matches::count_by_status(&tx, id, MatchStatus::InProgress)?;
        if in_progress > 0 {
            return Err(LeagueError::MatchesInProgress(in_progress));
        }

        let table = game_day_table(&tx, id)?;
        let champion_id = standings::determine_champion(&table);

        let closed_at = Utc::now().naive_utc();
        let snapshot = serde_json::to_string(&FinalStandings {
            standings: table,
            champion_id,
            closed_at,
        })?;

        if !database::game_days::close_game_day(&tx, id, champion_id, closed_at, &snapshot)? {
            return Err(LeagueError::GameDayClosed(id));
        }
        let closed = database::game_days::find_by_id(&tx, id)?
            .ok_or_else(|| LeagueError::not_found("Game day", id))?;
        tx.commit()?;

        match champion_id {
            Some(team_id) => info!("Closed game day {}: champion {}", id, team_id),
            None => info!("Closed game day {}: no champion", id),
        }
        Ok(closed)
    }

    /// Ranked table of a single game day; teams that did not play are left out.
    pub fn standings_for_game_day(&self, id: Uuid) -> Result<Vec<TeamStanding>> {
        let conn = database::get_connection(&self.pool)?;
        ensure_exists(&conn, id)?;
        game_day_table(&conn, id)
    }

    /// Leader of the day's table, `None` when nobody has points or the top
    /// is fully tied. On a closed day this is the crowned champion.
    pub fn champion_for_game_day(&self, id: Uuid) -> Result<Option<TeamId>> {
        let table = self.standings_for_game_day(id)?;
        Ok(standings::determine_champion(&table))
    }

    pub fn final_standings(&self, id: Uuid) -> Result<Option<FinalStandings>> {
        let game_day = self.get_game_day(id)?.game_day;
        match game_day.final_standings {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn open_game_day(&self) -> Result<Option<GameDay>> {
        let conn = database::get_connection(&self.pool)?;
        database::game_days::find_open(&conn)
    }

    pub fn list_game_days(&self) -> Result<Vec<GameDay>> {
        let conn = database::get_connection(&self.pool)?;
        database::game_days::list_all(&conn)
    }

    pub fn get_game_day(&self, id: Uuid) -> Result<GameDayDetail> {
        let conn = database::get_connection(&self.pool)?;
        let game_day = database::game_days::find_by_id(&conn, id)?
            .ok_or_else(|| LeagueError::not_found("Game day", id))?;
        let matches = database::matches::list_by_game_day(&conn, id)?;
        Ok(GameDayDetail { game_day, matches })
    }

    /// Deletes the day and, through the schema's cascade, all of its matches.
    pub fn delete_game_day(&self, id: Uuid) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        if !database::game_days::delete_game_day(&conn, id)? {
            return Err(LeagueError::not_found("Game day", id));
        }
        info!("Deleted game day {}", id);
        Ok(())
    }
}

fn new_game_day(date: NaiveDateTime, description: Option<String>, is_open: bool, duration: u32) -> GameDay {
    GameDay {
        id: Uuid::new_v4(),
        date,
        description,
        is_open,
        match_duration_minutes: duration,
        champion_id: None,
        closed_at: None,
        final_standings: None,
        created_at: None,
    }
}

fn game_day_table(conn: &Connection, id: Uuid) -> Result<Vec<TeamStanding>> {
    let teams = database::teams::list_all(conn)?;
    let matches = database::matches::list_finished_by_game_day(conn, id)?;
    Ok(standings::compute_standings(&teams, &matches, Scope::GameDay(id)))
}

fn ensure_exists(conn: &Connection, id: Uuid) -> Result<()> {
    match database::game_days::find_by_id(conn, id)? {
        Some(_) => Ok(()),
        None => Err(LeagueError::not_found("Game day", id)),
    }
}
