use chrono::Utc;
use log::{info, warn};
use rusqlite::{Connection, TransactionBehavior};

use crate::database::{self, DbPool};
use crate::domain::timer::actual_duration_minutes;
use crate::domain::validation::{validate_distinct_teams, validate_score};
use crate::domain::{GameDayId, Match, MatchId, MatchStatus, Team, TeamId};
use crate::errors::{LeagueError, Result};
use crate::standings::apply_match_result;

pub struct MatchService {
    pool: DbPool,
}

impl MatchService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Adds a single scheduled match to an open game day.
    pub fn create_match(&self, game_day_id: GameDayId, team1_id: TeamId, team2_id: TeamId) -> Result<Match> {
        validate_distinct_teams(team1_id, team2_id)?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_open_game_day(&tx, game_day_id)?;
        load_team(&tx, team1_id)?;
        load_team(&tx, team2_id)?;

        let created = database::matches::insert_match(&tx, &Match::scheduled(game_day_id, team1_id, team2_id))?;
        tx.commit()?;

        info!("Created match {} on game day {}", created.id, game_day_id);
        Ok(created)
    }

    pub fn start_match(&self, id: MatchId) -> Result<Match> {
        let conn = database::get_connection(&self.pool)?;
        let current = load_match(&conn, id)?;

        if !database::matches::mark_started(&conn, id, Utc::now().naive_utc())? {
            return Err(match current.status {
                MatchStatus::Finished => LeagueError::MatchAlreadyFinished(id),
                _ => LeagueError::Validation(format!("match {id} has already started")),
            });
        }

        info!("Match {} kicked off", id);
        load_match(&conn, id)
    }

    /// Live score update. Finished matches are corrected through the
    /// team results instead.
    pub fn update_goals(&self, id: MatchId, goals_team1: u32, goals_team2: u32) -> Result<Match> {
        validate_score(goals_team1, goals_team2)?;
        let conn = database::get_connection(&self.pool)?;
        load_match(&conn, id)?;

        if !database::matches::update_goals(&conn, id, goals_team1, goals_team2)? {
            return Err(LeagueError::MatchAlreadyFinished(id));
        }
        load_match(&conn, id)
    }

    /// Ends a match and credits both teams in one transaction.
    ///
    /// The status-guarded update rejects a second finish of the same match,
    /// and a missing team rolls everything back.
    pub fn finish_match(&self, id: MatchId, goals_team1: u32, goals_team2: u32) -> Result<Match> {
        validate_score(goals_team1, goals_team2)?;
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = load_match(&tx, id)?;
        let team1 = load_team(&tx, current.team1_id)?;
        let team2 = load_team(&tx, current.team2_id)?;

        let ended_at = Utc::now().naive_utc();
        let duration = current
            .started_at
            .map(|started_at| actual_duration_minutes(started_at, ended_at));

        if !database::matches::mark_finished(&tx, id, goals_team1, goals_team2, ended_at, duration)? {
            return Err(LeagueError::MatchAlreadyFinished(id));
        }

        let (updated1, updated2) = apply_match_result(&team1, &team2, goals_team1, goals_team2)?;

        for team in [&updated1, &updated2] {
            if !database::teams::update_totals(&tx, team)? {
                return Err(LeagueError::not_found("Team", team.id));
            }
        }

        let finished = load_match(&tx, id)?;
        tx.commit()?;

        info!(
            "Match {} finished {}-{} ({} vs {})",
            id, goals_team1, goals_team2, team1.name, team2.name
        );
        Ok(finished)
    }

    /// Sets up the next match after a finished one: `team_out` leaves,
    /// `team_in` takes its place against the team that stays.
    pub fn replace_team(&self, id: MatchId, team_out: TeamId, team_in: TeamId) -> Result<Match> {
        if team_out == team_in {
            return Err(LeagueError::InvalidReplacement(
                "the outgoing and incoming teams must differ".to_string(),
            ));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = load_match(&tx, id)?;
        if !current.is_finished() {
            return Err(LeagueError::InvalidReplacement(
                "only finished matches can have a team replaced".to_string(),
            ));
        }
        ensure_open_game_day(&tx, current.game_day_id)?;

        if !current.involves(team_out) {
            return Err(LeagueError::InvalidReplacement(
                "the outgoing team must have played this match".to_string(),
            ));
        }
        if current.involves(team_in) {
            return Err(LeagueError::InvalidReplacement(
                "the incoming team already played this match".to_string(),
            ));
        }
        load_team(&tx, team_in)?;

        let remaining = if current.team1_id == team_out {
            current.team2_id
        } else {
            current.team1_id
        };
        let next = database::matches::insert_match(&tx, &Match::scheduled(current.game_day_id, remaining, team_in))?;
        tx.commit()?;

        info!("Match {} follows {}: {} replaces {}", next.id, id, team_in, team_out);
        Ok(next)
    }

    /// Deletes a match. Totals already credited for a finished match stay.
    pub fn delete_match(&self, id: MatchId) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        let current = load_match(&conn, id)?;
        if current.is_finished() {
            warn!("Deleting finished match {}; team totals are not reverted", id);
        }
        database::matches::delete_match(&conn, id)?;
        Ok(())
    }

    pub fn get_match(&self, id: MatchId) -> Result<Match> {
        let conn = database::get_connection(&self.pool)?;
        load_match(&conn, id)
    }

    pub fn list_matches(&self, game_day_id: Option<GameDayId>) -> Result<Vec<Match>> {
        let conn = database::get_connection(&self.pool)?;
        match game_day_id {
            Some(id) => database::matches::list_by_game_day(&conn, id),
            None => database::matches::list_all(&conn),
        }
    }
}

fn load_match(conn: &Connection, id: MatchId) -> Result<Match> {
    database::matches::find_by_id(conn, id)?.ok_or_else(|| LeagueError::not_found("Match", id))
}

fn load_team(conn: &Connection, id: TeamId) -> Result<Team> {
    database::teams::find_by_id(conn, id)?.ok_or_else(|| LeagueError::not_found("Team", id))
}

fn ensure_open_game_day(conn: &Connection, id: GameDayId) -> Result<()> {
    let game_day =
        database::game_days::find_by_id(conn, id)?.ok_or_else(|| LeagueError::not_found("Game day", id))?;
    if !game_day.is_open {
        return Err(LeagueError::GameDayClosed(id));
    }
    Ok(())
}
