//! Human-friendly date expressions, converted to the epoch-millisecond
//! values the API expects for `due_date` and `start_date`.
//!
//! Accepted forms:
//!
//! * raw epoch milliseconds (`1508369194377`)
//! * `now`, `today`, `tomorrow`, `yesterday`, `next week`
//! * relative offsets: `in 3 days`, `2 weeks`, `90 minutes ago`, `4h`
//! * calendar dates: RFC 3339, `2024-05-01`, `2024-05-01 14:30`, `05/01/2024`
//!
//! Dates without a time of day resolve to UTC midnight.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::error::{DomainError, DomainResult};

pub fn to_epoch_millis(expr: &str, now: DateTime<Utc>) -> DomainResult<i64> {
    let normalized = expr.trim().to_lowercase();
    let invalid = || DomainError::InvalidDate(expr.to_string());

    if normalized.is_empty() {
        return Err(invalid());
    }

    if normalized.bytes().all(|b| b.is_ascii_digit()) {
        return normalized.parse().map_err(|_| invalid());
    }

    if let Some(at) = keyword(&normalized, now) {
        return Ok(at.timestamp_millis());
    }

    if let Some(at) = relative(&normalized, now) {
        return Ok(at.timestamp_millis());
    }

    calendar(expr.trim())
        .map(|at| at.timestamp_millis())
        .ok_or_else(invalid)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn keyword(expr: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = now.date_naive();
    match expr {
        "now" => Some(now),
        "today" => Some(midnight(today)),
        "tomorrow" => today.succ_opt().map(midnight),
        "yesterday" => today.pred_opt().map(midnight),
        "next week" => Some(now + Duration::weeks(1)),
        _ => None,
    }
}

fn unit_duration(unit: &str, amount: i64) -> Option<Duration> {
    match unit {
        "m" | "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount),
        "h" | "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount),
        "d" | "day" | "days" => Duration::try_days(amount),
        "w" | "wk" | "wks" | "week" | "weeks" => Duration::try_weeks(amount),
        _ => None,
    }
}

/// `in 3 days`, `3 days`, `3d`, `3 days ago`.
fn relative(expr: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let (body, past) = match expr.strip_suffix("ago") {
        Some(rest) => (rest.trim_end(), true),
        None => (expr, false),
    };
    let (body, future) = match body.strip_prefix("in ") {
        Some(rest) => (rest.trim(), true),
        None => (body.trim(), false),
    };
    if past && future {
        return None;
    }

    let split = body.find(|c: char| !c.is_ascii_digit())?;
    let (amount, unit) = body.split_at(split);
    let amount: i64 = amount.parse().ok()?;
    let offset = unit_duration(unit.trim(), amount)?;

    if past {
        now.checked_sub_signed(offset)
    } else {
        now.checked_add_signed(offset)
    }
}

fn calendar(expr: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(expr) {
        return Some(at.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(expr, format) {
            return Some(at.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(expr, format) {
            return Some(midnight(date));
        }
    }

    None
}
