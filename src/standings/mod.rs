pub mod champion;
pub mod results;
pub mod scoring;
pub mod table;
pub mod types;

pub use champion::determine_champion;
pub use results::results_table;
pub use scoring::{apply_match_result, points_for_result};
pub use table::{compute_standings, sort_standings};
pub use types::{FinalStandings, Scope, TeamResult, TeamStanding};
