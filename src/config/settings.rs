use crate::errors::{LeagueError, Result};

/// Time budget used to plan how many fixtures fit in a game day.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerSettings {
    pub total_minutes: u32,
    pub min_game_minutes: u32,
    pub max_game_minutes: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            total_minutes: 120, // 2 hours
            min_game_minutes: 8,
            max_game_minutes: 10,
        }
    }
}

impl SchedulerSettings {
    /// Midpoint of the configured game length, a planning constant.
    pub fn average_game_minutes(&self) -> f64 {
        (self.min_game_minutes as f64 + self.max_game_minutes as f64) / 2.0
    }

    pub fn max_games(&self) -> usize {
        (self.total_minutes as f64 / self.average_game_minutes()).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_minutes == 0 || self.min_game_minutes == 0 || self.max_game_minutes == 0 {
            return Err(LeagueError::InvalidSettings(
                "all durations must be positive".to_string(),
            ));
        }
        if self.min_game_minutes > self.max_game_minutes {
            return Err(LeagueError::InvalidSettings(format!(
                "min game minutes ({}) exceeds max game minutes ({})",
                self.min_game_minutes, self.max_game_minutes
            )));
        }
        Ok(())
    }
}

/// Live-timer duration bounds for a game day's matches.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDaySettings {
    pub default_match_duration: u32,
    pub min_match_duration: u32,
    pub max_match_duration: u32,
}

impl Default for GameDaySettings {
    fn default() -> Self {
        Self {
            default_match_duration: 10,
            min_match_duration: 1,
            max_match_duration: 120,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scheduler: SchedulerSettings,
    pub game_day: GameDaySettings,
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scheduler: SchedulerSettings::default(),
            game_day: GameDaySettings::default(),
            database_path: "gameday.db".to_string(),
        }
    }

    /// Defaults overridden by `DATABASE_PATH` and `GAMEDAY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database_path = path;
        }
        if let Some(value) = read_minutes("GAMEDAY_TOTAL_MINUTES")? {
            config.scheduler.total_minutes = value;
        }
        if let Some(value) = read_minutes("GAMEDAY_MIN_GAME_MINUTES")? {
            config.scheduler.min_game_minutes = value;
        }
        if let Some(value) = read_minutes("GAMEDAY_MAX_GAME_MINUTES")? {
            config.scheduler.max_game_minutes = value;
        }

        config.scheduler.validate()?;
        Ok(config)
    }
}

fn read_minutes(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| LeagueError::InvalidSettings(format!("{key} must be a whole number of minutes, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}
