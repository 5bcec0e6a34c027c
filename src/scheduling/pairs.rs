use super::types::Fixture;
use crate::domain::TeamId;

/// Every unordered pairing exactly once, in input order (i < j).
pub fn generate_all_pairs(team_ids: &[TeamId]) -> Vec<Fixture> {
    let mut pairs = Vec::with_capacity(pair_count(team_ids.len()));

    for (i, &first) in team_ids.iter().enumerate() {
        for &second in &team_ids[i + 1..] {
            pairs.push(Fixture::new(first, second));
        }
    }

    pairs
}

pub fn pair_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1) / 2
}
