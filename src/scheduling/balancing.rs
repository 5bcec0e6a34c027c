use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::Fixture;
use crate::domain::TeamId;

/// Picks at most `max_games` pairings so that every team plays roughly as
/// often as every other.
///
/// Greedy: each round takes the unused pair whose teams are furthest below
/// the ideal game count, first-seen winning ties. The result is reproducible
/// for identical input but not guaranteed to be the most even split possible.
pub fn balance_pairs(pairs: &[Fixture], team_ids: &[TeamId], max_games: usize) -> Vec<Fixture> {
    if pairs.len() <= max_games {
        return pairs.to_vec();
    }

    let mut game_counts: HashMap<TeamId, i64> = team_ids.iter().map(|&id| (id, 0)).collect();
    let ideal = ideal_games_per_team(max_games, team_ids.len());
    debug!("Balancing {} pairs down to {} games (ideal {} per team)", pairs.len(), max_games, ideal);

    let mut used: HashSet<(TeamId, TeamId)> = HashSet::with_capacity(max_games);
    let mut selected = Vec::with_capacity(max_games);

    while selected.len() < max_games {
        let Some(best) = pick_best_pair(pairs, &used, &game_counts, ideal) else {
            break;
        };

        used.insert(best.key());
        *game_counts.entry(best.team1_id).or_insert(0) += 1;
        *game_counts.entry(best.team2_id).or_insert(0) += 1;
        selected.push(best);
    }

    selected
}

pub fn ideal_games_per_team(max_games: usize, team_count: usize) -> i64 {
    if team_count == 0 {
        return 0;
    }
    (max_games * 2 / team_count) as i64
}

fn pick_best_pair(
    pairs: &[Fixture],
    used: &HashSet<(TeamId, TeamId)>,
    game_counts: &HashMap<TeamId, i64>,
    ideal: i64,
) -> Option<Fixture> {
    let mut best: Option<(i64, Fixture)> = None;

    for pair in pairs.iter().filter(|p| !used.contains(&p.key())) {
        let score = pair_score(pair, game_counts, ideal);
        // Strictly greater keeps the earliest pair on ties
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, *pair));
        }
    }

    best.map(|(_, pair)| pair)
}

fn pair_score(pair: &Fixture, game_counts: &HashMap<TeamId, i64>, ideal: i64) -> i64 {
    let count1 = game_counts.get(&pair.team1_id).copied().unwrap_or(0);
    let count2 = game_counts.get(&pair.team2_id).copied().unwrap_or(0);

    (ideal - count1) * 2 + (ideal - count2) * 2 - (count1 - count2).abs()
}
