// src/display/dates.rs
// =============================================================================
// Human-friendly "Updated ..." labels.
//
// Elapsed time is measured in whole days (rounded down). Months are 30 days
// and years are 365 days, both rounded down too, so 364 days reads as
// "12 months ago" and 365 days as "1 year ago".
// =============================================================================

use chrono::{DateTime, Utc};

// Label for a repository last updated at `updated_at`, as seen at `now`
pub fn updated_label(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // A timestamp slightly in the future (clock skew) reads as today
    let days = (now - updated_at).num_days().max(0);

    match days {
        0 => "Updated today".to_string(),
        1 => "Updated yesterday".to_string(),
        2..=29 => format!("Updated {} days ago", days),
        30..=364 => {
            let months = days / 30;
            format!("Updated {} {} ago", months, plural(months, "month"))
        }
        _ => {
            let years = days / 365;
            format!("Updated {} {} ago", years, plural(years, "year"))
        }
    }
}

// Same as updated_label, starting from an ISO-8601 / RFC 3339 string
pub fn format_date(iso_date: &str, now: DateTime<Utc>) -> Result<String, chrono::ParseError> {
    let updated_at = DateTime::parse_from_rfc3339(iso_date)?.with_timezone(&Utc);
    Ok(updated_label(updated_at, now))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
