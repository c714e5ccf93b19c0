//! Formatting helpers for presenting history timestamps.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Shown instead of a date the backend sent in an unrecognised shape.
pub const DATE_FALLBACK: &str = "Fecha no disponible";

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Parse a backend timestamp. Offset-less values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    let normalized = raw.trim_end_matches('Z').replacen(' ', "T", 1);
    let with_fraction =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let minutes_only = format_description!("[year]-[month]-[day]T[hour]:[minute]");

    PrimitiveDateTime::parse(&normalized, with_fraction)
        .or_else(|_| PrimitiveDateTime::parse(&normalized, with_seconds))
        .or_else(|_| PrimitiveDateTime::parse(&normalized, minutes_only))
        .map(PrimitiveDateTime::assume_utc)
        .ok()
        .or_else(|| {
            Date::parse(&normalized, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|date| date.midnight().assume_utc())
        })
}

/// `15 oct 2026, 14:30`, matching the `es-ES` short locale form.
pub fn format_es_datetime(ts: OffsetDateTime) -> String {
    let month = MONTHS_ES[usize::from(u8::from(ts.month())) - 1];
    format!(
        "{} {month} {}, {:02}:{:02}",
        ts.day(),
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

/// Display form of a history timestamp; never fails.
pub fn format_history_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => format_es_datetime(ts),
        None => {
            log::error!("Fecha inválida: {raw}");
            DATE_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_keeps_its_offset() {
        assert_eq!(
            format_history_date("2024-11-20T10:05:30.000Z"),
            "20 nov 2024, 10:05"
        );
        assert_eq!(
            format_history_date("2026-09-01T23:59:00+02:00"),
            "1 sept 2026, 23:59"
        );
    }

    #[test]
    fn sql_style_timestamps_are_accepted() {
        assert_eq!(format_history_date("2024-01-07 08:30:00"), "7 ene 2024, 08:30");
        assert_eq!(
            format_history_date("2024-01-07T08:30:00.123"),
            "7 ene 2024, 08:30"
        );
        assert_eq!(format_history_date("2024-05-03"), "3 may 2024, 00:00");
    }

    #[test]
    fn unparsable_dates_fall_back() {
        assert_eq!(format_history_date("ayer"), DATE_FALLBACK);
        assert_eq!(format_history_date(""), DATE_FALLBACK);
        assert_eq!(format_history_date("2024-13-45T99:00:00Z"), DATE_FALLBACK);
    }
}
