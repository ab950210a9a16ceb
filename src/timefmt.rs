//! Relative and absolute timestamp formatting.
//!
//! The backend emits ISO-ish strings in a couple of shapes (full RFC 3339,
//! naive datetime, bare date). Anything unparseable is returned verbatim
//! rather than reported as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

/// Parse one of the timestamp shapes the backend produces.
fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn count_ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Coarse relative label ("just now", "5 minutes ago", ...) against `now`.
pub fn relative_label(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse(raw) else {
        return raw.to_string();
    };
    let secs = (now - then).num_seconds();
    if secs < MINUTE {
        "just now".to_string()
    } else if secs < HOUR {
        count_ago(secs / MINUTE, "minute")
    } else if secs < DAY {
        count_ago(secs / HOUR, "hour")
    } else if secs < WEEK {
        count_ago(secs / DAY, "day")
    } else if secs < MONTH {
        count_ago(secs / WEEK, "week")
    } else {
        count_ago(secs / MONTH, "month")
    }
}

/// Relative label against the wall clock.
pub fn relative(raw: &str) -> String {
    relative_label(raw, Utc::now())
}

/// Short absolute date, e.g. "Mar 2024".
pub fn absolute_date(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn test_just_now_under_a_minute() {
        assert_eq!(relative_label(&ago(Duration::seconds(30)), now()), "just now");
    }

    #[test]
    fn test_minute_bucket() {
        assert_eq!(
            relative_label(&ago(Duration::minutes(5)), now()),
            "5 minutes ago"
        );
    }

    #[test]
    fn test_ninety_minutes_lands_in_hour_bucket() {
        assert_eq!(
            relative_label(&ago(Duration::minutes(90)), now()),
            "1 hour ago"
        );
    }

    #[test]
    fn test_forty_days_lands_in_month_bucket() {
        assert_eq!(
            relative_label(&ago(Duration::days(40)), now()),
            "1 month ago"
        );
    }

    #[test]
    fn test_plural_units_keep_their_s() {
        assert_eq!(
            relative_label(&ago(Duration::hours(5)), now()),
            "5 hours ago"
        );
        assert_eq!(
            relative_label(&ago(Duration::days(14)), now()),
            "2 weeks ago"
        );
    }

    #[test]
    fn test_three_days_lands_in_day_bucket() {
        assert_eq!(relative_label(&ago(Duration::days(3)), now()), "3 days ago");
    }

    #[test]
    fn test_unparseable_input_returned_verbatim() {
        assert_eq!(relative_label("not a date", now()), "not a date");
        assert_eq!(absolute_date("???"), "???");
    }

    #[test]
    fn test_bare_date_parses() {
        assert_eq!(absolute_date("2024-03-15"), "Mar 2024");
    }

    #[test]
    fn test_naive_datetime_parses() {
        assert_eq!(absolute_date("2024-03-15T08:30:00"), "Mar 2024");
    }
}
