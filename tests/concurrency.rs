use std::path::PathBuf;
use std::sync::Barrier;
use std::thread;

use gameday_league::config::settings::AppConfig;
use gameday_league::database::{self, DbPool};
use gameday_league::errors::LeagueError;
use gameday_league::services::{GameDayService, MatchService, SchedulingService, StandingsService, TeamService};
use uuid::Uuid;

/// A database file in the system temp dir, removed on drop
struct TempDb {
    path: PathBuf,
}

impl TempDb {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("gameday-{}.db", Uuid::new_v4()));
        Self { path }
    }

    fn pool(&self) -> DbPool {
        let pool = database::create_pool(self.path.to_str().unwrap()).unwrap();
        {
            let conn = database::get_connection(&pool).unwrap();
            database::setup::initialize_database(&conn).unwrap();
        }
        pool
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

/// Runs `f` on two threads released at the same moment and returns both results.
fn race<T: Send>(f: impl Fn() -> T + Sync) -> (T, T) {
    let barrier = Barrier::new(2);
    thread::scope(|s| {
        let run = || {
            barrier.wait();
            f()
        };
        let first = s.spawn(run);
        let second = s.spawn(run);
        (first.join().unwrap(), second.join().unwrap())
    })
}

#[test]
fn test_concurrent_finishes_credit_teams_once() {
    let db = TempDb::new();
    let pool = db.pool();
    let teams = TeamService::new(pool.clone());
    let a = teams.create_team("A", "#000000", "#FFFFFF").unwrap();
    let b = teams.create_team("B", "#000000", "#FFFFFF").unwrap();
    let day = GameDayService::new(pool.clone(), AppConfig::new())
        .start_game_day(None)
        .unwrap();

    let matches = MatchService::new(pool.clone());
    let m = matches.create_match(day.id, a.id, b.id).unwrap();
    matches.start_match(m.id).unwrap();

    let (first, second) = race(|| matches.finish_match(m.id, 2, 1));

    let (ok, err) = match (first, second) {
        (Ok(done), Err(e)) | (Err(e), Ok(done)) => (done, e),
        other => panic!("expected exactly one successful finish, got {other:?}"),
    };
    assert_eq!((ok.goals_team1, ok.goals_team2), (2, 1));
    assert!(matches!(err, LeagueError::MatchAlreadyFinished(id) if id == m.id));

    let results = StandingsService::new(pool).results().unwrap();
    let winner = results.iter().find(|r| r.team_id == a.id).unwrap();
    let loser = results.iter().find(|r| r.team_id == b.id).unwrap();
    assert_eq!((winner.points, winner.goals_scored, winner.goals_conceded), (3, 2, 1));
    assert_eq!((loser.points, loser.goals_scored, loser.goals_conceded), (0, 1, 2));
}

#[test]
fn test_concurrent_scheduling_inserts_one_bracket() {
    let db = TempDb::new();
    let pool = db.pool();
    let teams = TeamService::new(pool.clone());
    for name in ["A", "B", "C", "D", "E"] {
        teams.create_team(name, "#000000", "#FFFFFF").unwrap();
    }
    let config = AppConfig::new();
    let day = GameDayService::new(pool.clone(), config.clone())
        .start_game_day(None)
        .unwrap();

    let scheduler = SchedulingService::new(pool.clone(), config);
    let (first, second) = race(|| scheduler.schedule_matches(day.id));

    let (summary, err) = match (first, second) {
        (Ok(summary), Err(e)) | (Err(e), Ok(summary)) => (summary, e),
        other => panic!("expected exactly one bracket, got {other:?}"),
    };
    assert!(matches!(err, LeagueError::AlreadyScheduled(id) if id == day.id));

    let stored = MatchService::new(pool).list_matches(Some(day.id)).unwrap();
    assert_eq!(stored.len(), summary.total_matches);
    assert_eq!(stored.len(), 10);
}

#[test]
fn test_concurrent_starts_open_one_game_day() {
    let db = TempDb::new();
    let pool = db.pool();
    let days = GameDayService::new(pool, AppConfig::new());

    let (first, second) = race(|| days.start_game_day(None));

    assert!(first.is_ok() != second.is_ok());
    let err = first.err().or(second.err()).unwrap();
    assert!(matches!(err, LeagueError::GameDayAlreadyOpen(_)));
    assert_eq!(days.list_game_days().unwrap().len(), 1);
}
