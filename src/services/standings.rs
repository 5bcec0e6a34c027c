use log::info;
use rusqlite::TransactionBehavior;

use crate::database::{self, DbPool};
use crate::domain::validation::validate_totals;
use crate::domain::{Team, TeamId};
use crate::errors::{LeagueError, Result};
use crate::standings::{self, Scope, TeamResult, TeamStanding};

pub struct StandingsService {
    pool: DbPool,
}

impl StandingsService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Table over every finished match, or over a single game day.
    pub fn standings(&self, scope: Scope) -> Result<Vec<TeamStanding>> {
        let conn = database::get_connection(&self.pool)?;
        let teams = database::teams::list_all(&conn)?;

        let matches = match scope {
            Scope::All => database::matches::list_finished(&conn)?,
            Scope::GameDay(id) => {
                if database::game_days::find_by_id(&conn, id)?.is_none() {
                    return Err(LeagueError::not_found("Game day", id));
                }
                database::matches::list_finished_by_game_day(&conn, id)?
            }
        };

        Ok(standings::compute_standings(&teams, &matches, scope))
    }

    /// Cumulative totals as stored on the teams
    pub fn results(&self) -> Result<Vec<TeamResult>> {
        let conn = database::get_connection(&self.pool)?;
        let teams = database::teams::list_all(&conn)?;
        Ok(standings::results_table(&teams))
    }

    /// Overwrites a team's running totals by hand.
    pub fn set_team_totals(&self, team_id: TeamId, points: u32, goals_scored: u32, goals_conceded: u32) -> Result<Team> {
        validate_totals(points, goals_scored, goals_conceded)?;
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut team = database::teams::find_by_id(&tx, team_id)?
            .ok_or_else(|| LeagueError::not_found("Team", team_id))?;
        team.points = points;
        team.goals_scored = goals_scored;
        team.goals_conceded = goals_conceded;

        database::teams::update_totals(&tx, &team)?;
        tx.commit()?;

        info!("Corrected totals of {}: {} pts, {}:{}", team.name, points, goals_scored, goals_conceded);
        Ok(team)
    }

    /// Zeroes every team's running totals at once.
    pub fn reset_all(&self) -> Result<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let count = database::teams::reset_all_totals(&tx)?;
        tx.commit()?;

        info!("Reset totals of {} teams", count);
        Ok(count)
    }
}
