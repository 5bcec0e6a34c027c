use std::collections::HashMap;

use chrono::Utc;
use colored::Colorize;

use crate::domain::timer::{format_clock, is_time_up, remaining_time};
use crate::domain::{GameDay, Match, MatchStatus, Team, TeamId, TeamQueue};
use crate::scheduling::SchedulingStats;
use crate::services::{GameDayDetail, ScheduleSummary};
use crate::standings::{TeamResult, TeamStanding};

pub fn print_teams(teams: &[Team]) {
    if teams.is_empty() {
        println!("No teams registered");
        return;
    }
    for team in teams {
        println!(
            "{}  {:<24} {} / {}",
            team.id.to_string().dimmed(),
            team.name.bold(),
            team.primary_color,
            team.secondary_color
        );
    }
}

pub fn print_team_totals(team: &Team) {
    print_teams(std::slice::from_ref(team));
    println!(
        "  {} pts, {} scored, {} conceded",
        team.points.to_string().bold(),
        team.goals_scored,
        team.goals_conceded
    );
}

pub fn print_game_days(game_days: &[GameDay]) {
    if game_days.is_empty() {
        println!("No game days yet");
        return;
    }
    for day in game_days {
        let state = if day.is_open { "open".green() } else { "closed".red() };
        println!(
            "{}  {}  {:<6}  {} min",
            day.id.to_string().dimmed(),
            day.date.format("%Y-%m-%d %H:%M"),
            state,
            day.match_duration_minutes
        );
    }
}

pub fn print_game_day_detail(detail: &GameDayDetail, teams: &[Team]) {
    let day = &detail.game_day;
    print_game_days(std::slice::from_ref(day));
    if let Some(description) = &day.description {
        println!("  {}", description.italic());
    }
    if let Some(champion) = day.champion_id {
        println!("  Champion: {}", team_name(&names(teams), champion).yellow().bold());
    }
    print_matches(&detail.matches, teams, Some(day.match_duration_minutes));
}

pub fn print_matches(matches: &[Match], teams: &[Team], match_duration: Option<u32>) {
    if matches.is_empty() {
        println!("No matches");
        return;
    }
    let names = names(teams);
    let now = Utc::now().naive_utc();

    for (idx, m) in matches.iter().enumerate() {
        let status = match m.status {
            MatchStatus::Scheduled => m.status.as_str().normal(),
            MatchStatus::InProgress => m.status.as_str().yellow(),
            MatchStatus::Finished => m.status.as_str().green(),
        };
        let clock = match (m.status, match_duration) {
            (MatchStatus::InProgress, Some(duration)) => {
                let remaining = remaining_time(m.started_at, duration, now);
                if is_time_up(remaining) {
                    format!("  [{}]", "time up".red().bold())
                } else {
                    format!("  [{}]", format_clock(remaining))
                }
            }
            _ => String::new(),
        };
        println!(
            "{:>3}. {}  {:>20} {} x {} {:<20}  {}{}",
            idx + 1,
            m.id.to_string().dimmed(),
            team_name(&names, m.team1_id),
            m.goals_team1,
            m.goals_team2,
            team_name(&names, m.team2_id),
            status,
            clock
        );
    }
}

pub fn print_standings(standings: &[TeamStanding]) {
    if standings.is_empty() {
        println!("No finished matches");
        return;
    }
    println!(
        "{}",
        format!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        )
        .bold()
    );
    for (idx, s) in standings.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}",
            idx + 1,
            s.team_name,
            s.matches_played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            s.goal_difference,
            s.points
        );
    }
}

pub fn print_results(results: &[TeamResult]) {
    println!("{}", format!("{:>3}  {:<24} {:>4} {:>4} {:>4}", "#", "Team", "Pts", "GF", "GA").bold());
    for (idx, r) in results.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>4} {:>4} {:>4}",
            idx + 1,
            r.name,
            r.points,
            r.goals_scored,
            r.goals_conceded
        );
    }
}

pub fn print_schedule_summary(summary: &ScheduleSummary, teams: &[Team]) {
    println!(
        "{} {} of {} possible matches for {} teams",
        "Scheduled".green().bold(),
        summary.total_matches,
        summary.max_possible_matches,
        summary.teams_participating
    );
    print_matches(&summary.matches, teams, None);
}

pub fn print_stats(stats: &SchedulingStats) {
    println!("Teams:                    {}", stats.total_teams);
    println!("Possible matches:         {}", stats.total_possible_matches);
    println!("Matches in time window:   {}", stats.max_matches_in_time_window);
    println!("Recommended matches:      {}", stats.recommended_matches);
    println!("Average games per team:   {}", stats.average_games_per_team);
    println!("Existing matches:         {}", stats.existing_matches);
    let verdict = if stats.can_schedule { "yes".green() } else { "no".red() };
    println!("Can schedule:             {}", verdict);
}

pub fn print_queue(queue: &TeamQueue, teams: &[Team]) {
    if queue.team_ids.is_empty() {
        println!("Queue is empty");
        return;
    }
    let names = names(teams);
    for (idx, id) in queue.team_ids.iter().enumerate() {
        let label = team_name(&names, *id);
        if idx == 0 {
            println!("{:>3}. {}  {}", idx + 1, label.bold(), "next".green());
        } else {
            println!("{:>3}. {}", idx + 1, label);
        }
    }
}

fn names(teams: &[Team]) -> HashMap<TeamId, &str> {
    teams.iter().map(|t| (t.id, t.name.as_str())).collect()
}

fn team_name(names: &HashMap<TeamId, &str>, id: TeamId) -> String {
    names
        .get(&id)
        .map(|name| name.to_string())
        .unwrap_or_else(|| id.to_string())
}
