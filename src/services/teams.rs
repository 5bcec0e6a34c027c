use log::info;

use crate::database::{self, DbPool};
use crate::domain::validation::validate_team;
use crate::domain::{Team, TeamId};
use crate::errors::{LeagueError, Result};

pub struct TeamService {
    pool: DbPool,
}

impl TeamService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_team(&self, name: &str, primary_color: &str, secondary_color: &str) -> Result<Team> {
        let input = validate_team(name, primary_color, secondary_color)?;
        let conn = database::get_connection(&self.pool)?;

        let team = database::teams::insert_team(
            &conn,
            &Team::new(&input.name, &input.primary_color, &input.secondary_color),
        )?;
        info!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let conn = database::get_connection(&self.pool)?;
        database::teams::list_all(&conn)
    }

    pub fn get_team(&self, id: TeamId) -> Result<Team> {
        let conn = database::get_connection(&self.pool)?;
        database::teams::find_by_id(&conn, id)?.ok_or_else(|| LeagueError::not_found("Team", id))
    }

    /// Removes the team together with every match it took part in.
    pub fn delete_team(&self, id: TeamId) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        if !database::teams::delete_team(&conn, id)? {
            return Err(LeagueError::not_found("Team", id));
        }
        info!("Deleted team {}", id);
        Ok(())
    }
}
