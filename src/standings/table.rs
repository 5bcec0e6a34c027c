use std::collections::HashMap;

use log::{debug, warn};

use super::types::{Scope, TeamStanding};
use crate::domain::{Match, Outcome, Team, TeamId, POINTS_FOR_DRAW, POINTS_FOR_WIN};

/// Builds the league table from finished matches.
///
/// Aggregates are recomputed from scratch on every call. Scoped tables drop
/// teams that did not play; the global table keeps them at zero. Ranking is
/// a stable sort on points, goal difference and goals for, so fully tied
/// teams keep their input order.
pub fn compute_standings(teams: &[Team], matches: &[Match], scope: Scope) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams.iter().map(TeamStanding::empty).collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(idx, team)| (team.id, idx))
        .collect();

    let counted = matches
        .iter()
        .filter(|m| m.is_finished() && in_scope(m, scope))
        .filter(|m| fold_match(&mut standings, &index, m))
        .count();
    debug!("Folded {} finished matches into {} standings", counted, standings.len());

    for standing in &mut standings {
        standing.goal_difference = standing.goals_for as i64 - standing.goals_against as i64;
    }

    if let Scope::GameDay(_) = scope {
        standings.retain(|s| s.matches_played > 0);
    }

    sort_standings(&mut standings);
    standings
}

/// Descending by (points, goal difference, goals for); stable.
pub fn sort_standings(standings: &mut [TeamStanding]) {
    standings.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
}

fn in_scope(m: &Match, scope: Scope) -> bool {
    match scope {
        Scope::All => true,
        Scope::GameDay(id) => m.game_day_id == id,
    }
}

fn fold_match(standings: &mut [TeamStanding], index: &HashMap<TeamId, usize>, m: &Match) -> bool {
    let (Some(&i1), Some(&i2)) = (index.get(&m.team1_id), index.get(&m.team2_id)) else {
        warn!("Skipping match {}: references a team that no longer exists", m.id);
        return false;
    };

    record_side(&mut standings[i1], m.goals_team1, m.goals_team2);
    record_side(&mut standings[i2], m.goals_team2, m.goals_team1);

    match Outcome::from_goals(m.goals_team1, m.goals_team2) {
        Outcome::Team1Win => {
            award_win(&mut standings[i1]);
            standings[i2].losses = standings[i2].losses.saturating_add(1);
        }
        Outcome::Team2Win => {
            award_win(&mut standings[i2]);
            standings[i1].losses = standings[i1].losses.saturating_add(1);
        }
        Outcome::Draw => {
            award_draw(&mut standings[i1]);
            award_draw(&mut standings[i2]);
        }
    }
    true
}

fn record_side(standing: &mut TeamStanding, scored: u32, conceded: u32) {
    standing.matches_played = standing.matches_played.saturating_add(1);
    standing.goals_for = standing.goals_for.saturating_add(scored);
    standing.goals_against = standing.goals_against.saturating_add(conceded);
}

fn award_win(standing: &mut TeamStanding) {
    standing.wins = standing.wins.saturating_add(1);
    standing.points = standing.points.saturating_add(POINTS_FOR_WIN);
}

fn award_draw(standing: &mut TeamStanding) {
    standing.draws = standing.draws.saturating_add(1);
    standing.points = standing.points.saturating_add(POINTS_FOR_DRAW);
}
