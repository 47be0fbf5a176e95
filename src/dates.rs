use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Formats tried, in order, when a date is neither slash- nor hyphen-shaped.
/// Kept free of locale or current-date input so results reproduce everywhere.
const FALLBACK_FORMATS: &[&str] = &[
    "%B %d, %Y", // March 3, 2024
    "%b %d, %Y", // Mar 3, 2024
    "%B %d %Y",  // March 3 2024
    "%d %B %Y",  // 3 March 2024
    "%d %b %Y",  // 3 Mar 2024
    "%Y.%m.%d",  // 2024.03.03
];

fn canonical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Normalize a raw date string to canonical `YYYY-MM-DD`, or `None` when no
/// rule accepts it. Rules are tried in a fixed priority order:
///
/// 1. `MM/DD/YYYY` or `MM/DD/YY` — permissive range check only (month 1-12,
///    day 1-31; no per-month or leap-year validation). Once the three-part
///    slash shape matches, out-of-range fields reject the value outright.
/// 2. Hyphenated with a 4-digit first part — already canonical, passed
///    through unchanged.
/// 3. Hyphenated otherwise — read as `DD-MM-YYYY`. The day-first assumption
///    is fixed, not configurable.
/// 4. Anything else — the fallback format list above.
///
/// Two-digit years are always promoted into the 2000s (`25` -> `2025`),
/// never the 1900s. Every accepted value is re-checked against
/// `^\d{4}-\d{2}-\d{2}$` so a malformed string can never leak through the
/// pass-through branch.
pub fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let candidate = if raw.split('/').count() == 3 {
        slash_mdy(raw)
    } else if raw.split('-').count() == 3 {
        hyphenated(raw)
    } else {
        fallback(raw)
    }?;
    if !canonical_re().is_match(&candidate) {
        return None;
    }
    Some(candidate)
}

fn slash_mdy(raw: &str) -> Option<String> {
    let mut parts = raw.split('/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year = promote_year(parts.next()?.trim())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

fn hyphenated(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts[0].len() == 4 {
        // Already YYYY-MM-DD; the caller's canonical re-check is the only gate.
        return Some(raw.to_string());
    }
    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year = promote_year(parts[2].trim())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

fn promote_year(raw: &str) -> Option<i32> {
    if raw.len() == 2 {
        format!("20{raw}").parse().ok()
    } else {
        raw.parse().ok()
    }
}

fn fallback(raw: &str) -> Option<String> {
    for fmt in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_mdy() {
        assert_eq!(normalize("03/21/2024"), Some("2024-03-21".to_string()));
        assert_eq!(normalize("1/5/2024"), Some("2024-01-05".to_string()));
        assert_eq!(normalize("12/31/2024"), Some("2024-12-31".to_string()));
    }

    #[test]
    fn test_slash_two_digit_year_promotes_to_2000s() {
        assert_eq!(normalize("03/21/24"), Some("2024-03-21".to_string()));
        assert_eq!(normalize("01/01/99"), Some("2099-01-01".to_string()));
    }

    #[test]
    fn test_slash_out_of_range_rejects_without_clamping() {
        assert_eq!(normalize("13/40/2024"), None);
        assert_eq!(normalize("13/01/2024"), None);
        assert_eq!(normalize("01/32/2024"), None);
        assert_eq!(normalize("0/15/2024"), None);
        assert_eq!(normalize("31/31/2024"), None);
    }

    #[test]
    fn test_slash_is_permissive_within_range() {
        // Deliberately not calendar-exact: Feb 31 passes the range check.
        assert_eq!(normalize("02/31/2024"), Some("2024-02-31".to_string()));
    }

    #[test]
    fn test_slash_non_numeric_rejects() {
        assert_eq!(normalize("ab/cd/2024"), None);
        assert_eq!(normalize("03/21/20x4"), None);
    }

    #[test]
    fn test_canonical_passes_through() {
        assert_eq!(normalize("2024-03-21"), Some("2024-03-21".to_string()));
        assert_eq!(normalize("  2024-03-21  "), Some("2024-03-21".to_string()));
    }

    #[test]
    fn test_pass_through_still_revalidated() {
        // 4-digit first part but not canonical overall.
        assert_eq!(normalize("2024-3-21"), None);
        assert_eq!(normalize("2024-03-2x"), None);
    }

    #[test]
    fn test_hyphen_day_first() {
        assert_eq!(normalize("21-03-2024"), Some("2024-03-21".to_string()));
        assert_eq!(normalize("5-1-2024"), Some("2024-01-05".to_string()));
        assert_eq!(normalize("21-03-24"), Some("2024-03-21".to_string()));
    }

    #[test]
    fn test_hyphen_day_first_out_of_range_rejects() {
        assert_eq!(normalize("32-01-2024"), None);
        assert_eq!(normalize("01-13-2024"), None);
    }

    #[test]
    fn test_fallback_free_form() {
        assert_eq!(normalize("March 3, 2024"), Some("2024-03-03".to_string()));
        assert_eq!(normalize("Mar 3, 2024"), Some("2024-03-03".to_string()));
        assert_eq!(normalize("3 March 2024"), Some("2024-03-03".to_string()));
        assert_eq!(normalize("2024.03.03"), Some("2024-03-03".to_string()));
    }

    #[test]
    fn test_slash_shape_never_reaches_fallback() {
        // Three slash parts belong to the MM/DD/YYYY rule; a year-first slash
        // date is out of range there and must not be rescued by the fallback.
        assert_eq!(normalize("2024/03/03"), None);
    }

    #[test]
    fn test_fallback_garbage_rejects() {
        assert_eq!(normalize("not a date"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("2024"), None);
        assert_eq!(normalize("Marchtember 3, 2024"), None);
    }

    #[test]
    fn test_idempotent_on_success() {
        for raw in ["03/21/2024", "21-03-2024", "2024-03-21", "March 3, 2024", "03/21/24"] {
            let once = normalize(raw).unwrap();
            assert_eq!(normalize(&once), Some(once.clone()), "not idempotent for {raw}");
        }
    }
}
