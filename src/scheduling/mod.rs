pub mod balancing;
pub mod pairs;
pub mod types;

use std::collections::HashSet;

use log::info;

use crate::config::settings::SchedulerSettings;
use crate::domain::TeamId;
use crate::errors::{LeagueError, Result};

pub use balancing::balance_pairs;
pub use pairs::generate_all_pairs;
pub use types::{Fixture, SchedulingStats};

/// Builds the bracket for one game day: as many distinct pairings as fit in
/// the time window, spread evenly across teams.
pub fn schedule_fixtures(team_ids: &[TeamId], settings: &SchedulerSettings) -> Result<Vec<Fixture>> {
    // 1. Validate input before doing any work
    settings.validate()?;
    ensure_unique(team_ids)?;
    if team_ids.len() < 2 {
        return Err(LeagueError::InsufficientTeams { found: team_ids.len() });
    }

    // 2. Every possible pairing
    let all_pairs = generate_all_pairs(team_ids);

    // 3. How many games fit in the window
    let max_games = settings.max_games();
    info!(
        "Scheduling {} teams: {} possible pairs, room for {} games",
        team_ids.len(),
        all_pairs.len(),
        max_games
    );

    // 4. Trim to capacity keeping the load even
    let selected = balance_pairs(&all_pairs, team_ids, max_games);
    if selected.is_empty() {
        return Err(LeagueError::NoFixtures);
    }

    info!("Selected {} fixtures", selected.len());
    Ok(selected)
}

pub fn scheduling_stats(team_count: usize, existing_matches: usize, settings: &SchedulerSettings) -> SchedulingStats {
    let max_games = settings.max_games();

    if team_count < 2 {
        return SchedulingStats {
            total_teams: team_count,
            total_possible_matches: 0,
            max_matches_in_time_window: max_games,
            recommended_matches: 0,
            average_games_per_team: 0,
            existing_matches,
            can_schedule: false,
        };
    }

    let total_possible = pairs::pair_count(team_count);
    let recommended = total_possible.min(max_games);

    SchedulingStats {
        total_teams: team_count,
        total_possible_matches: total_possible,
        max_matches_in_time_window: max_games,
        recommended_matches: recommended,
        average_games_per_team: recommended * 2 / team_count,
        existing_matches,
        can_schedule: existing_matches == 0,
    }
}

fn ensure_unique(team_ids: &[TeamId]) -> Result<()> {
    let mut seen = HashSet::with_capacity(team_ids.len());
    for &id in team_ids {
        if !seen.insert(id) {
            return Err(LeagueError::DuplicateTeam(id));
        }
    }
    Ok(())
}
