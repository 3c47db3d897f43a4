//! Text formatting for the rate and remaining-time regions.

use crate::units::{select_unit_rounded, UnitTable};

const SECS_PER_DAY: u64 = 86_400;

/// Largest day count rendered; anything beyond is treated as unrenderable.
const MAX_DAYS: u64 = 999_999_999;

/// `"<scaled rate> <label>/s"`, e.g. `"1.50 kB/s"`.
pub fn format_rate(rate: f64, units: &UnitTable, round_digits: u32) -> String {
    let scaled = select_unit_rounded(rate, units, round_digits);
    format!(
        "{:.prec$} {}/s",
        scaled.value,
        scaled.label(),
        prec = round_digits as usize
    )
}

/// Remaining time for display; unknown renders as an empty string.
pub fn format_remaining(seconds: Option<f64>) -> String {
    match seconds {
        Some(secs) => format_duration(secs).unwrap_or_default(),
        None => String::new(),
    }
}

/// Whole seconds (ties to even) as `H:MM:SS`, with a day count once past
/// 24 hours: `"0:01:05"`, `"1 day, 2:00:00"`, `"3 days, 0:00:07"`.
///
/// Returns `None` for negative, non-finite, or absurdly large inputs.
pub fn format_duration(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let rounded = seconds.round_ties_even();
    if rounded >= ((MAX_DAYS + 1) * SECS_PER_DAY) as f64 {
        return None;
    }
    let total = rounded as u64;

    let days = total / SECS_PER_DAY;
    let hours = (total % SECS_PER_DAY) / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    let clock = format!("{hours}:{minutes:02}:{secs:02}");

    Some(match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0).as_deref(), Some("0:00:00"));
        assert_eq!(format_duration(65.0).as_deref(), Some("0:01:05"));
        assert_eq!(format_duration(3600.0 * 10.0).as_deref(), Some("10:00:00"));
        assert_eq!(format_duration(86_400.0 + 7200.0).as_deref(), Some("1 day, 2:00:00"));
        assert_eq!(format_duration(3.0 * 86_400.0 + 7.0).as_deref(), Some("3 days, 0:00:07"));
    }

    #[test]
    fn test_format_duration_rounds_half_to_even() {
        assert_eq!(format_duration(2.5).as_deref(), Some("0:00:02"));
        assert_eq!(format_duration(3.5).as_deref(), Some("0:00:04"));
        assert_eq!(format_duration(59.6).as_deref(), Some("0:01:00"));
    }

    #[test]
    fn test_format_duration_unrenderable() {
        assert_eq!(format_duration(-1.0), None);
        assert_eq!(format_duration(f64::NAN), None);
        assert_eq!(format_duration(f64::INFINITY), None);
        assert_eq!(format_duration(1e300), None);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(None), "");
        assert_eq!(format_remaining(Some(f64::INFINITY)), "");
        assert_eq!(format_remaining(Some(90.0)), "0:01:30");
    }

    #[test]
    fn test_format_rate() {
        let units = UnitTable::from_pairs([("bytes", 1.0), ("kB", 1000.0)]).unwrap();
        assert_eq!(format_rate(1500.0, &units, 2), "1.50 kB/s");
        assert_eq!(format_rate(0.0, &units, 2), "0.00 bytes/s");
        assert_eq!(format_rate(42.0, &UnitTable::single("MB"), 1), "42.0 MB/s");
    }
}
