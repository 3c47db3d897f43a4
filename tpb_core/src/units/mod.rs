//! Unit tables and "reasonable unit" selection.
//!
//! A [`UnitTable`] lists the units a value may be shown in; [`select_unit`]
//! picks the one that puts the value closest to the `[1, 1000)` band.

pub mod selector;
pub mod table;

pub use selector::{adjusted_exponent, round_to, select_unit, select_unit_rounded, DEFAULT_ROUND_DIGITS};
pub use table::UnitTable;
