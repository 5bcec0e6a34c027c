use super::types::TeamStanding;
use crate::domain::TeamId;

/// Winner of a game-day table, or `None` when nobody stands out.
///
/// `standings` must already be ranked. There is no champion when no team
/// played, when the leader has no points, or when another team matches the
/// leader on points, goal difference and goals for.
pub fn determine_champion(standings: &[TeamStanding]) -> Option<TeamId> {
    let leader = standings.first()?;

    if leader.points == 0 {
        return None;
    }

    let tied = standings
        .iter()
        .filter(|s| s.rank_key() == leader.rank_key())
        .count();

    if tied > 1 {
        return None;
    }

    Some(leader.team_id)
}
