use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TeamId = Uuid;
pub type GameDayId = Uuid;
pub type MatchId = Uuid;

/// A team with its cumulative totals across every game day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub created_at: Option<NaiveDateTime>,
}

impl Team {
    pub fn new(name: &str, primary_color: &str, secondary_color: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            primary_color: primary_color.to_string(),
            secondary_color: secondary_color.to_string(),
            points: 0,
            goals_scored: 0,
            goals_conceded: 0,
            created_at: None,
        }
    }
}

/// A single session during which matches are played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDay {
    pub id: GameDayId,
    pub date: NaiveDateTime,
    pub description: Option<String>,
    pub is_open: bool,
    pub match_duration_minutes: u32,
    pub champion_id: Option<TeamId>,
    pub closed_at: Option<NaiveDateTime>,
    pub final_standings: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Finished => "finished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(MatchStatus::Scheduled),
            "in_progress" => Some(MatchStatus::InProgress),
            "finished" => Some(MatchStatus::Finished),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub game_day_id: GameDayId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub status: MatchStatus,
    pub goals_team1: u32,
    pub goals_team2: u32,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    pub actual_duration_minutes: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Match {
    /// A fresh scheduled match with a 0-0 score
    pub fn scheduled(game_day_id: GameDayId, team1_id: TeamId, team2_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_day_id,
            team1_id,
            team2_id,
            status: MatchStatus::Scheduled,
            goals_team1: 0,
            goals_team2: 0,
            started_at: None,
            ended_at: None,
            actual_duration_minutes: None,
            created_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// Teams lined up by hand for the next matches of a game day, front first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamQueue {
    pub game_day_id: GameDayId,
    pub team_ids: Vec<TeamId>,
}

impl TeamQueue {
    pub fn contains(&self, team_id: TeamId) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// Appends the given teams in order, skipping any already queued.
    /// Returns how many were added.
    pub fn push_new(&mut self, team_ids: &[TeamId]) -> usize {
        let before = self.team_ids.len();
        for &id in team_ids {
            if !self.contains(id) {
                self.team_ids.push(id);
            }
        }
        self.team_ids.len() - before
    }
}

/// Outcome of a match from team 1's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Team1Win,
    Team2Win,
    Draw,
}

impl Outcome {
    pub fn from_goals(goals_team1: u32, goals_team2: u32) -> Self {
        if goals_team1 > goals_team2 {
            Outcome::Team1Win
        } else if goals_team2 > goals_team1 {
            Outcome::Team2Win
        } else {
            Outcome::Draw
        }
    }
}

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
