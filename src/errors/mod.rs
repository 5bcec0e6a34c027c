use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the engines, the store and the services.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("Invalid {field}: '{value}' is not a valid id")]
    InvalidId { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Match duration must be between {min} and {max} minutes, got {value}")]
    InvalidDuration { value: u32, min: u32, max: u32 },

    #[error("Teams of a match must be different")]
    SameTeams,

    #[error("Team {0} appears more than once")]
    DuplicateTeam(Uuid),

    #[error("Invalid scheduler settings: {0}")]
    InvalidSettings(String),

    #[error("At least 2 teams are required to schedule matches, found {found}")]
    InsufficientTeams { found: usize },

    #[error("No balanced fixtures could be generated")]
    NoFixtures,

    #[error("Game day {0} already has matches; delete them before scheduling again")]
    AlreadyScheduled(Uuid),

    #[error("Game day {0} is closed")]
    GameDayClosed(Uuid),

    #[error("Game day {0} is already open; close it before starting another")]
    GameDayAlreadyOpen(Uuid),

    #[error("Cannot close game day: {0} match(es) still in progress")]
    MatchesInProgress(usize),

    #[error("Match {0} is already finished")]
    MatchAlreadyFinished(Uuid),

    #[error("Invalid team replacement: {0}")]
    InvalidReplacement(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LeagueError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        LeagueError::NotFound { entity, id }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
