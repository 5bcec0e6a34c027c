use chrono::{Duration, NaiveDateTime};

/// Time left on a match clock. Full duration before kick-off, never negative.
pub fn remaining_time(
    started_at: Option<NaiveDateTime>,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> Duration {
    let total = Duration::minutes(duration_minutes as i64);
    match started_at {
        None => total,
        Some(start) => {
            let elapsed = now.signed_duration_since(start);
            (total - elapsed).max(Duration::zero())
        }
    }
}

pub fn is_time_up(remaining: Duration) -> bool {
    remaining <= Duration::zero()
}

/// Formats a duration as `mm:ss`.
pub fn format_clock(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Elapsed minutes between kick-off and the final whistle, rounded to 2 decimals.
pub fn actual_duration_minutes(started_at: NaiveDateTime, ended_at: NaiveDateTime) -> f64 {
    let millis = ended_at.signed_duration_since(started_at).num_milliseconds() as f64;
    (millis / 1000.0 / 60.0 * 100.0).round() / 100.0
}
