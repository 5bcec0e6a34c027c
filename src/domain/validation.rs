use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::config::settings::GameDaySettings;
use crate::errors::{LeagueError, Result};

const MAX_TEAM_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Highest score one side may record in a single match
pub const MAX_GOALS_PER_MATCH: u32 = 99;

/// Ceiling for hand-corrected cumulative totals
pub const MAX_TEAM_TOTAL: u32 = 1_000_000;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Parses a hyphenated UUID, naming the offending field on failure.
pub fn parse_id(field: &'static str, value: &str) -> Result<Uuid> {
    Uuid::try_parse(value.trim()).map_err(|_| LeagueError::InvalidId {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamInput {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
}

/// Trims the name and checks length and color format.
pub fn validate_team(name: &str, primary_color: &str, secondary_color: &str) -> Result<TeamInput> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::Validation("team name is required".to_string()));
    }
    if name.chars().count() > MAX_TEAM_NAME_LEN {
        return Err(LeagueError::Validation(format!(
            "team name must be at most {MAX_TEAM_NAME_LEN} characters"
        )));
    }
    validate_color("primary color", primary_color)?;
    validate_color("secondary color", secondary_color)?;

    Ok(TeamInput {
        name: name.to_string(),
        primary_color: primary_color.to_string(),
        secondary_color: secondary_color.to_string(),
    })
}

fn validate_color(field: &str, value: &str) -> Result<()> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        Err(LeagueError::Validation(format!(
            "{field} must be a hex code like #FF0000, got '{value}'"
        )))
    }
}

pub fn validate_match_duration(minutes: u32, settings: &GameDaySettings) -> Result<u32> {
    if (settings.min_match_duration..=settings.max_match_duration).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(LeagueError::InvalidDuration {
            value: minutes,
            min: settings.min_match_duration,
            max: settings.max_match_duration,
        })
    }
}

pub fn validate_description(description: Option<&str>) -> Result<Option<String>> {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LEN => Err(LeagueError::Validation(format!(
            "description must be at most {MAX_DESCRIPTION_LEN} characters"
        ))),
        Some(d) => Ok(Some(d.to_string())),
        None => Ok(None),
    }
}

pub fn validate_score(goals_team1: u32, goals_team2: u32) -> Result<()> {
    if goals_team1 > MAX_GOALS_PER_MATCH || goals_team2 > MAX_GOALS_PER_MATCH {
        return Err(LeagueError::Validation(format!(
            "goals must be between 0 and {MAX_GOALS_PER_MATCH}, got {goals_team1}-{goals_team2}"
        )));
    }
    Ok(())
}

pub fn validate_totals(points: u32, goals_scored: u32, goals_conceded: u32) -> Result<()> {
    for (field, value) in [
        ("points", points),
        ("goals scored", goals_scored),
        ("goals conceded", goals_conceded),
    ] {
        if value > MAX_TEAM_TOTAL {
            return Err(LeagueError::Validation(format!(
                "{field} must be at most {MAX_TEAM_TOTAL}, got {value}"
            )));
        }
    }
    Ok(())
}

pub fn validate_distinct_teams(team1_id: Uuid, team2_id: Uuid) -> Result<()> {
    if team1_id == team2_id {
        return Err(LeagueError::SameTeams);
    }
    Ok(())
}
