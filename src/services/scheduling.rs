use log::info;
use rusqlite::TransactionBehavior;
use uuid::Uuid;

use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{Match, TeamId};
use crate::errors::{LeagueError, Result};
use crate::scheduling::{self, pairs::pair_count, SchedulingStats};

/// What a generated bracket looks like once stored
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    pub matches: Vec<Match>,
    pub total_matches: usize,
    pub max_possible_matches: usize,
    pub teams_participating: usize,
}

pub struct SchedulingService {
    pool: DbPool,
    config: AppConfig,
}

impl SchedulingService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Generates and stores the bracket for an open, empty game day.
    ///
    /// Preconditions are checked inside the same immediate transaction as
    /// the inserts, so two concurrent calls cannot both create fixtures and
    /// a failure leaves no partial bracket behind.
    pub fn schedule_matches(&self, game_day_id: Uuid) -> Result<ScheduleSummary> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let game_day = database::game_days::find_by_id(&tx, game_day_id)?
            .ok_or_else(|| LeagueError::not_found("Game day", game_day_id))?;
        if !game_day.is_open {
            return Err(LeagueError::GameDayClosed(game_day_id));
        }
        if database::matches::count_by_game_day(&tx, game_day_id)? > 0 {
            return Err(LeagueError::AlreadyScheduled(game_day_id));
        }

        let team_ids: Vec<TeamId> = database::teams::list_all(&tx)?
            .into_iter()
            .map(|team| team.id)
            .collect();
        let fixtures = scheduling::schedule_fixtures(&team_ids, &self.config.scheduler)?;

        let mut matches = Vec::with_capacity(fixtures.len());
        for fixture in &fixtures {
            let scheduled = Match::scheduled(game_day_id, fixture.team1_id, fixture.team2_id);
            matches.push(database::matches::insert_match(&tx, &scheduled)?);
        }
        tx.commit()?;

        info!("Scheduled {} matches for game day {}", matches.len(), game_day_id);
        Ok(ScheduleSummary {
            total_matches: matches.len(),
            max_possible_matches: pair_count(team_ids.len()),
            teams_participating: team_ids.len(),
            matches,
        })
    }

    pub fn stats(&self, game_day_id: Option<Uuid>) -> Result<SchedulingStats> {
        let conn = database::get_connection(&self.pool)?;
        let team_count = database::teams::list_all(&conn)?.len();

        let existing = match game_day_id {
            Some(id) => {
                if database::game_days::find_by_id(&conn, id)?.is_none() {
                    return Err(LeagueError::not_found("Game day", id));
                }
                database::matches::count_by_game_day(&conn, id)?
            }
            None => 0,
        };

        Ok(scheduling::scheduling_stats(team_count, existing, &self.config.scheduler))
    }
}
