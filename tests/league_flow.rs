use gameday_league::config::settings::AppConfig;
use gameday_league::database::{self, DbPool};
use gameday_league::domain::{MatchStatus, Team};
use gameday_league::errors::LeagueError;
use gameday_league::services::{
    GameDayService, MatchService, QueueService, SchedulingService, StandingsService, TeamService,
};
use gameday_league::standings::Scope;

fn setup() -> (DbPool, AppConfig) {
    let pool = database::create_memory_pool().unwrap();
    {
        let conn = database::get_connection(&pool).unwrap();
        database::setup::initialize_database(&conn).unwrap();
    }
    (pool, AppConfig::new())
}

fn add_teams(pool: &DbPool, names: &[&str]) -> Vec<Team> {
    let service = TeamService::new(pool.clone());
    names
        .iter()
        .map(|name| service.create_team(name, "#112233", "#FFFFFF").unwrap())
        .collect()
}

#[test]
fn test_only_one_game_day_can_be_open() {
    let (pool, config) = setup();
    let days = GameDayService::new(pool, config);

    let first = days.start_game_day(None).unwrap();
    assert!(first.is_open);
    assert_eq!(first.match_duration_minutes, 10);

    let err = days.start_game_day(Some(8)).unwrap_err();
    assert!(matches!(err, LeagueError::GameDayAlreadyOpen(id) if id == first.id));
    assert_eq!(days.list_game_days().unwrap().len(), 1);
}

#[test]
fn test_start_game_day_rejects_bad_duration() {
    let (pool, config) = setup();
    let days = GameDayService::new(pool, config);

    assert!(matches!(
        days.start_game_day(Some(0)).unwrap_err(),
        LeagueError::InvalidDuration { value: 0, .. }
    ));
    assert!(days.open_game_day().unwrap().is_none());
}

#[test]
fn test_schedule_four_teams_plays_every_pair_once() {
    let (pool, config) = setup();
    add_teams(&pool, &["A", "B", "C", "D"]);
    let day = GameDayService::new(pool.clone(), config.clone())
        .start_game_day(None)
        .unwrap();

    let summary = SchedulingService::new(pool, config).schedule_matches(day.id).unwrap();

    assert_eq!(summary.total_matches, 6);
    assert_eq!(summary.max_possible_matches, 6);
    assert_eq!(summary.teams_participating, 4);
    assert!(summary.matches.iter().all(|m| m.status == MatchStatus::Scheduled));
}

#[test]
fn test_schedule_twice_is_rejected_without_inserting() {
    let (pool, config) = setup();
    add_teams(&pool, &["A", "B", "C"]);
    let day = GameDayService::new(pool.clone(), config.clone())
        .start_game_day(None)
        .unwrap();
    let scheduler = SchedulingService::new(pool.clone(), config);

    scheduler.schedule_matches(day.id).unwrap();
    let err = scheduler.schedule_matches(day.id).unwrap_err();

    assert!(matches!(err, LeagueError::AlreadyScheduled(id) if id == day.id));
    assert_eq!(MatchService::new(pool).list_matches(Some(day.id)).unwrap().len(), 3);
}

#[test]
fn test_schedule_needs_two_teams() {
    let (pool, config) = setup();
    add_teams(&pool, &["Solo"]);
    let day = GameDayService::new(pool.clone(), config.clone())
        .start_game_day(None)
        .unwrap();

    let err = SchedulingService::new(pool.clone(), config)
        .schedule_matches(day.id)
        .unwrap_err();

    assert!(matches!(err, LeagueError::InsufficientTeams { found: 1 }));
    assert!(MatchService::new(pool).list_matches(Some(day.id)).unwrap().is_empty());
}

#[test]
fn test_finishing_twice_credits_teams_once() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool.clone());

    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.start_match(m.id).unwrap();
    let finished = matches.finish_match(m.id, 2, 1).unwrap();
    assert_eq!(finished.status, MatchStatus::Finished);
    assert!(finished.ended_at.is_some());

    let err = matches.finish_match(m.id, 5, 0).unwrap_err();
    assert!(matches!(err, LeagueError::MatchAlreadyFinished(id) if id == m.id));

    let results = StandingsService::new(pool).results().unwrap();
    assert_eq!(results[0].name, "A");
    assert_eq!((results[0].points, results[0].goals_scored, results[0].goals_conceded), (3, 2, 1));
    assert_eq!((results[1].points, results[1].goals_scored, results[1].goals_conceded), (0, 1, 2));
}

#[test]
fn test_live_goals_rejected_after_finish() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool);

    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.start_match(m.id).unwrap();
    assert_eq!(matches.update_goals(m.id, 1, 0).unwrap().goals_team1, 1);

    matches.finish_match(m.id, 1, 1).unwrap();
    assert!(matches!(
        matches.update_goals(m.id, 3, 0).unwrap_err(),
        LeagueError::MatchAlreadyFinished(_)
    ));
}

#[test]
fn test_close_blocked_by_match_in_progress() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let days = GameDayService::new(pool.clone(), config);
    let day = days.start_game_day(None).unwrap();
    let matches = MatchService::new(pool);

    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.start_match(m.id).unwrap();

    assert!(matches!(
        days.close_game_day(day.id).unwrap_err(),
        LeagueError::MatchesInProgress(1)
    ));
    assert!(days.open_game_day().unwrap().is_some());
}

#[test]
fn test_close_crowns_champion_and_stores_final_table() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B", "C"]);
    let days = GameDayService::new(pool.clone(), config);
    let day = days.start_game_day(None).unwrap();
    let matches = MatchService::new(pool.clone());

    let ab = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.finish_match(ab.id, 2, 0).unwrap();
    let bc = matches.create_match(day.id, teams[1].id, teams[2].id).unwrap();
    matches.finish_match(bc.id, 1, 1).unwrap();

    let closed = days.close_game_day(day.id).unwrap();
    assert!(!closed.is_open);
    assert!(closed.closed_at.is_some());
    assert_eq!(closed.champion_id, Some(teams[0].id));

    let snapshot = days.final_standings(day.id).unwrap().unwrap();
    assert_eq!(snapshot.champion_id, Some(teams[0].id));
    let order: Vec<_> = snapshot.standings.iter().map(|s| s.team_name.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B"]);

    assert!(matches!(
        days.close_game_day(day.id).unwrap_err(),
        LeagueError::GameDayClosed(_)
    ));
    assert!(matches!(
        matches.create_match(day.id, teams[0].id, teams[2].id).unwrap_err(),
        LeagueError::GameDayClosed(_)
    ));

    // A new day may open once the previous one is closed
    assert!(days.start_game_day(None).is_ok());
}

#[test]
fn test_close_without_finished_matches_has_no_champion() {
    let (pool, config) = setup();
    add_teams(&pool, &["A", "B"]);
    let days = GameDayService::new(pool, config);
    let day = days.start_game_day(None).unwrap();

    let closed = days.close_game_day(day.id).unwrap();
    assert_eq!(closed.champion_id, None);
    assert!(days.final_standings(day.id).unwrap().unwrap().standings.is_empty());
}

#[test]
fn test_scoped_standings_ignore_other_days() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let days = GameDayService::new(pool.clone(), config);
    let matches = MatchService::new(pool.clone());

    let first = days.start_game_day(None).unwrap();
    let m = matches.create_match(first.id, teams[0].id, teams[1].id).unwrap();
    matches.finish_match(m.id, 3, 0).unwrap();
    days.close_game_day(first.id).unwrap();

    let second = days.start_game_day(None).unwrap();
    let m = matches.create_match(second.id, teams[0].id, teams[1].id).unwrap();
    matches.finish_match(m.id, 0, 1).unwrap();

    let standings = StandingsService::new(pool);
    let today = standings.standings(Scope::GameDay(second.id)).unwrap();
    assert_eq!(today[0].team_name, "B");
    assert_eq!(today[0].points, 3);

    let overall = standings.standings(Scope::All).unwrap();
    assert_eq!(overall[0].team_name, "A");
    assert_eq!((overall[0].points, overall[0].goal_difference), (3, 2));
    assert_eq!(overall[1].points, 3);
}

#[test]
fn test_replace_team_creates_follow_up_match() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B", "C"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool);

    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    assert!(matches!(
        matches.replace_team(m.id, teams[1].id, teams[2].id).unwrap_err(),
        LeagueError::InvalidReplacement(_)
    ));

    matches.finish_match(m.id, 2, 0).unwrap();
    let next = matches.replace_team(m.id, teams[1].id, teams[2].id).unwrap();
    assert_eq!(next.team1_id, teams[0].id);
    assert_eq!(next.team2_id, teams[2].id);
    assert_eq!(next.status, MatchStatus::Scheduled);

    assert!(matches!(
        matches.replace_team(m.id, teams[2].id, teams[1].id).unwrap_err(),
        LeagueError::InvalidReplacement(_)
    ));
}

#[test]
fn test_set_and_reset_team_totals() {
    let (pool, _) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let standings = StandingsService::new(pool);

    let corrected = standings.set_team_totals(teams[1].id, 7, 5, 2).unwrap();
    assert_eq!(corrected.points, 7);
    assert_eq!(standings.results().unwrap()[0].name, "B");

    assert_eq!(standings.reset_all().unwrap(), 2);
    assert!(standings.results().unwrap().iter().all(|r| r.points == 0 && r.goals_scored == 0));
}

#[test]
fn test_deleting_team_removes_its_matches() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B", "C"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool.clone());
    matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.create_match(day.id, teams[1].id, teams[2].id).unwrap();

    TeamService::new(pool).delete_team(teams[0].id).unwrap();

    let remaining = matches.list_matches(Some(day.id)).unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(!remaining[0].involves(teams[0].id));
}

#[test]
fn test_stats_report_existing_matches() {
    let (pool, config) = setup();
    add_teams(&pool, &["A", "B", "C", "D"]);
    let day = GameDayService::new(pool.clone(), config.clone())
        .start_game_day(None)
        .unwrap();
    let scheduler = SchedulingService::new(pool, config);

    let before = scheduler.stats(Some(day.id)).unwrap();
    assert!(before.can_schedule);
    assert_eq!(before.total_possible_matches, 6);

    scheduler.schedule_matches(day.id).unwrap();
    let after = scheduler.stats(Some(day.id)).unwrap();
    assert_eq!(after.existing_matches, 6);
    assert!(!after.can_schedule);
}

#[test]
fn test_out_of_range_scores_leave_totals_untouched() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool.clone());

    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.start_match(m.id).unwrap();

    assert!(matches!(
        matches.finish_match(m.id, u32::MAX, 0).unwrap_err(),
        LeagueError::Validation(_)
    ));
    assert!(matches!(
        matches.update_goals(m.id, 0, 100).unwrap_err(),
        LeagueError::Validation(_)
    ));
    assert_eq!(matches.get_match(m.id).unwrap().status, MatchStatus::InProgress);

    let standings = StandingsService::new(pool);
    assert!(matches!(
        standings.set_team_totals(teams[0].id, 3, u32::MAX, 0).unwrap_err(),
        LeagueError::Validation(_)
    ));
    assert!(standings.results().unwrap().iter().all(|r| r.points == 0 && r.goals_scored == 0));

    // The match can still be finished with a sane score afterwards
    matches.finish_match(m.id, 4, 0).unwrap();
    assert_eq!(standings.results().unwrap()[0].goals_scored, 4);
}

#[test]
fn test_champion_of_stored_game_day() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B", "C"]);
    let days = GameDayService::new(pool.clone(), config);
    let matches = MatchService::new(pool);
    let day = days.start_game_day(None).unwrap();

    // Nothing played yet, so nobody has points
    assert_eq!(days.champion_for_game_day(day.id).unwrap(), None);

    // A beats B 1-0: A leads alone
    let ab = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();
    matches.finish_match(ab.id, 1, 0).unwrap();
    assert_eq!(days.champion_for_game_day(day.id).unwrap(), Some(teams[0].id));

    // C beats B 1-0: A and C both on 3 pts, GD +1, GF 1, so the top is tied
    let cb = matches.create_match(day.id, teams[2].id, teams[1].id).unwrap();
    matches.finish_match(cb.id, 1, 0).unwrap();
    assert_eq!(days.champion_for_game_day(day.id).unwrap(), None);

    let closed = days.close_game_day(day.id).unwrap();
    assert_eq!(closed.champion_id, None);
    assert_eq!(days.champion_for_game_day(day.id).unwrap(), closed.champion_id);
    assert_eq!(days.final_standings(day.id).unwrap().unwrap().standings.len(), 3);
}

#[test]
fn test_champion_of_unknown_game_day_is_not_found() {
    let (pool, config) = setup();
    let days = GameDayService::new(pool, config);

    assert!(matches!(
        days.champion_for_game_day(uuid::Uuid::new_v4()).unwrap_err(),
        LeagueError::NotFound { .. }
    ));
}

#[test]
fn test_get_team_and_match_by_id() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let matches = MatchService::new(pool.clone());
    let m = matches.create_match(day.id, teams[0].id, teams[1].id).unwrap();

    assert_eq!(TeamService::new(pool).get_team(teams[1].id).unwrap().name, "B");
    assert_eq!(matches.get_match(m.id).unwrap(), m);
    assert!(matches!(
        matches.get_match(uuid::Uuid::new_v4()).unwrap_err(),
        LeagueError::NotFound { entity: "Match", .. }
    ));
}

#[test]
fn test_queue_add_remove_and_reorder() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B", "C", "D"]);
    let day = GameDayService::new(pool.clone(), config).start_game_day(None).unwrap();
    let queue = QueueService::new(pool);
    let ids: Vec<_> = teams.iter().map(|t| t.id).collect();

    assert!(queue.get_queue(day.id).unwrap().team_ids.is_empty());

    queue.add_teams(day.id, &[ids[0], ids[1]]).unwrap();
    let line = queue.add_teams(day.id, &[ids[1], ids[2]]).unwrap();
    assert_eq!(line.team_ids, vec![ids[0], ids[1], ids[2]]);

    let line = queue.remove_team(day.id, ids[1]).unwrap();
    assert_eq!(line.team_ids, vec![ids[0], ids[2]]);
    assert!(matches!(
        queue.remove_team(day.id, ids[1]).unwrap_err(),
        LeagueError::NotFound { .. }
    ));

    queue.set_order(day.id, &[ids[3], ids[2], ids[0]]).unwrap();
    assert_eq!(queue.get_queue(day.id).unwrap().team_ids, vec![ids[3], ids[2], ids[0]]);

    assert!(matches!(
        queue.set_order(day.id, &[ids[0], ids[0]]).unwrap_err(),
        LeagueError::DuplicateTeam(_)
    ));
    assert_eq!(queue.get_queue(day.id).unwrap().team_ids.len(), 3);

    queue.set_order(day.id, &[]).unwrap();
    assert!(queue.get_queue(day.id).unwrap().team_ids.is_empty());
}

#[test]
fn test_queue_rejects_unknown_team_and_closed_day() {
    let (pool, config) = setup();
    let teams = add_teams(&pool, &["A", "B"]);
    let days = GameDayService::new(pool.clone(), config);
    let day = days.start_game_day(None).unwrap();
    let queue = QueueService::new(pool);

    assert!(matches!(
        queue.add_teams(day.id, &[teams[0].id, uuid::Uuid::new_v4()]).unwrap_err(),
        LeagueError::NotFound { entity: "Team", .. }
    ));
    assert!(queue.get_queue(day.id).unwrap().team_ids.is_empty());

    queue.add_teams(day.id, &[teams[0].id]).unwrap();
    days.close_game_day(day.id).unwrap();

    assert!(matches!(
        queue.add_teams(day.id, &[teams[1].id]).unwrap_err(),
        LeagueError::GameDayClosed(_)
    ));
    assert!(matches!(queue.clear(day.id).unwrap_err(), LeagueError::GameDayClosed(_)));
    assert_eq!(queue.get_queue(day.id).unwrap().team_ids, vec![teams[0].id]);
}

