use serde::{Deserialize, Serialize};

use crate::domain::TeamId;

/// An unordered pairing of two distinct teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub team1_id: TeamId,
    pub team2_id: TeamId,
}

impl Fixture {
    pub fn new(team1_id: TeamId, team2_id: TeamId) -> Self {
        Self { team1_id, team2_id }
    }

    /// Order-independent identity of the pairing
    pub fn key(&self) -> (TeamId, TeamId) {
        if self.team1_id < self.team2_id {
            (self.team1_id, self.team2_id)
        } else {
            (self.team2_id, self.team1_id)
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// Planning figures shown before a bracket is generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingStats {
    pub total_teams: usize,
    pub total_possible_matches: usize,
    pub max_matches_in_time_window: usize,
    pub recommended_matches: usize,
    pub average_games_per_team: usize,
    pub existing_matches: usize,
    pub can_schedule: bool,
}
