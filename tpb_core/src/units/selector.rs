use crate::types::types::ScaledValue;

use super::table::UnitTable;

pub const DEFAULT_ROUND_DIGITS: u32 = 2;

/// Pick the most reasonable unit for `value`, rounding to
/// [`DEFAULT_ROUND_DIGITS`] places.
pub fn select_unit(value: f64, units: &UnitTable) -> ScaledValue<'_> {
    select_unit_rounded(value, units, DEFAULT_ROUND_DIGITS)
}

/// Pick the unit whose scaled value has an adjusted exponent closest to 1.
///
/// Cost is `|adjusted_exponent(value / multiplier) - 1|`, so `400 kB` beats
/// `0.4 MB` and `3 kB` beats `3000 bytes`. Equal costs keep the earlier
/// unit. Zero and non-finite values cost the same under every unit, which
/// means the first unit in the table is chosen.
pub fn select_unit_rounded(value: f64, units: &UnitTable, round_digits: u32) -> ScaledValue<'_> {
    let unit = units
        .iter()
        .min_by_key(|unit| (adjusted_exponent(value / unit.multiplier) - 1).abs())
        .unwrap_or(units.first());

    ScaledValue {
        value: round_to(value / unit.multiplier, round_digits),
        unit,
    }
}

/// Exponent of `value` in normalized scientific notation: 0 for
/// `1 <= |v| < 10`, 2 for 400, -1 for 0.4.
///
/// Zero and non-finite values report 0.
pub fn adjusted_exponent(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    // Exponent of the shortest decimal repr. Powers of ten with no exact
    // float (1e-6, 1e23) report their nominal exponent, one above what the
    // exact binary value would give.
    let repr = format!("{:e}", value.abs());
    repr.rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// Round to `digits` decimal places. Values too large to scale are
/// returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
