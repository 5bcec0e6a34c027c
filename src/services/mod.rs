pub mod game_days;
pub mod matches;
pub mod queue;
pub mod scheduling;
pub mod standings;
pub mod teams;

pub use game_days::{GameDayDetail, GameDayService};
pub use matches::MatchService;
pub use queue::QueueService;
pub use scheduling::{ScheduleSummary, SchedulingService};
pub use standings::StandingsService;
pub use teams::TeamService;
