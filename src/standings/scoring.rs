use crate::domain::{Outcome, Team, POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::errors::{LeagueError, Result};

/// Points each side earns from a final score (3 win, 1 draw, 0 loss)
pub fn points_for_result(goals_team1: u32, goals_team2: u32) -> (u32, u32) {
    match Outcome::from_goals(goals_team1, goals_team2) {
        Outcome::Team1Win => (POINTS_FOR_WIN, 0),
        Outcome::Team2Win => (0, POINTS_FOR_WIN),
        Outcome::Draw => (POINTS_FOR_DRAW, POINTS_FOR_DRAW),
    }
}

/// Credits a finished match to both teams' running totals.
///
/// Pure: the caller persists both returned teams together with the match's
/// move to `finished`, or none of them. Fails instead of wrapping when a
/// total would leave the `u32` range.
pub fn apply_match_result(team1: &Team, team2: &Team, goals_team1: u32, goals_team2: u32) -> Result<(Team, Team)> {
    let (points1, points2) = points_for_result(goals_team1, goals_team2);
    let updated1 = credit(team1, points1, goals_team1, goals_team2)?;
    let updated2 = credit(team2, points2, goals_team2, goals_team1)?;
    Ok((updated1, updated2))
}

fn credit(team: &Team, points: u32, scored: u32, conceded: u32) -> Result<Team> {
    let overflow = || LeagueError::Validation(format!("totals of team {} would overflow", team.name));

    let mut updated = team.clone();
    updated.points = team.points.checked_add(points).ok_or_else(overflow)?;
    updated.goals_scored = team.goals_scored.checked_add(scored).ok_or_else(overflow)?;
    updated.goals_conceded = team.goals_conceded.checked_add(conceded).ok_or_else(overflow)?;
    Ok(updated)
}
