use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{GameDayId, Team, TeamId};

/// Which finished matches feed a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    GameDay(GameDayId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStanding {
    pub fn empty(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            primary_color: team.primary_color.clone(),
            secondary_color: team.secondary_color.clone(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Tuple the table is ranked by, highest first
    pub fn rank_key(&self) -> (u32, i64, u32) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

/// Snapshot stored on a game day when it is closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStandings {
    pub standings: Vec<TeamStanding>,
    pub champion_id: Option<TeamId>,
    pub closed_at: NaiveDateTime,
}

/// Cumulative totals as kept on the team rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team_id: TeamId,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}
