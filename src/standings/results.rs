use super::types::TeamResult;
use crate::domain::Team;

/// All-time table from the teams' stored totals: points, then goals scored.
pub fn results_table(teams: &[Team]) -> Vec<TeamResult> {
    let mut results: Vec<TeamResult> = teams
        .iter()
        .map(|team| TeamResult {
            team_id: team.id,
            name: team.name.clone(),
            primary_color: team.primary_color.clone(),
            secondary_color: team.secondary_color.clone(),
            points: team.points,
            goals_scored: team.goals_scored,
            goals_conceded: team.goals_conceded,
        })
        .collect();

    results.sort_by(|a, b| (b.points, b.goals_scored).cmp(&(a.points, a.goals_scored)));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, points: u32, goals: u32) -> Team {
        let mut team = Team::new(name, "#000000", "#FFFFFF");
        team.points = points;
        team.goals_scored = goals;
        team
    }

    #[test]
    fn test_sorted_by_points_then_goals() {
        let teams = vec![team("A", 3, 1), team("B", 6, 0), team("C", 3, 4)];
        let names: Vec<_> = results_table(&teams).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
