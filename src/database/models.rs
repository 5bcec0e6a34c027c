use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::domain::MatchStatus;

// Column lists shared by the row parsers
pub const TEAM_COLUMNS: &str =
    "id, name, primary_color, secondary_color, points, goals_scored, goals_conceded, created_at";

pub const GAME_DAY_COLUMNS: &str =
    "id, date, description, is_open, match_duration_minutes, champion_id, closed_at, final_standings, created_at";

pub const MATCH_COLUMNS: &str = "id, game_day_id, team1_id, team2_id, status, goals_team1, goals_team2, started_at, ended_at, actual_duration_minutes, created_at";

impl ToSql for MatchStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for MatchStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_str()?;
        MatchStatus::parse(raw).ok_or_else(|| FromSqlError::Other(format!("unknown match status '{raw}'").into()))
    }
}
