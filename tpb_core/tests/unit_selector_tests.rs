use tpb_core::types::types::{ConfigError, UnitSpec};
use tpb_core::units::{select_unit, select_unit_rounded, UnitTable};

/// Helper: the SI byte table used throughout.
fn bytes_table() -> UnitTable {
    UnitTable::from_pairs([("bytes", 1.0), ("kB", 1000.0), ("MB", 1_000_000.0)]).unwrap()
}

// ---------------------------------------------------------------
// select_unit
// ---------------------------------------------------------------

#[test]
fn test_select_one_byte() {
    let table = bytes_table();
    let scaled = select_unit(1.0, &table);
    assert_eq!(scaled.value, 1.0);
    assert_eq!(scaled.label(), "bytes");
    assert_eq!(scaled.multiplier(), 1.0);
}

#[test]
fn test_select_kilobytes() {
    let table = bytes_table();
    let scaled = select_unit(1500.0, &table);
    assert_eq!(scaled.value, 1.5);
    assert_eq!(scaled.label(), "kB");
}

#[test]
fn test_select_megabytes() {
    let table = bytes_table();
    let scaled = select_unit(2_500_000.0, &table);
    assert_eq!(scaled.value, 2.5);
    assert_eq!(scaled.label(), "MB");
}

#[test]
fn test_select_prefers_hundreds_over_fractions() {
    // 400 kB beats 0.4 MB
    let table = bytes_table();
    let scaled = select_unit(0.4 * 1e6, &table);
    assert_eq!(scaled.label(), "kB");
    assert_eq!(scaled.value, 400.0);
}

#[test]
fn test_select_prefers_units_over_thousands() {
    // 3 kB beats 3000 bytes
    let table = bytes_table();
    let scaled = select_unit(3000.0, &table);
    assert_eq!(scaled.label(), "kB");
    assert_eq!(scaled.value, 3.0);
}

#[test]
fn test_select_is_independent_of_table_order() {
    let shuffled =
        UnitTable::from_pairs([("MB", 1_000_000.0), ("bytes", 1.0), ("kB", 1000.0)]).unwrap();
    assert_eq!(select_unit(1.0, &shuffled).label(), "bytes");
    assert_eq!(select_unit(1500.0, &shuffled).label(), "kB");
    assert_eq!(select_unit(2_500_000.0, &shuffled).label(), "MB");
}

#[test]
fn test_select_tie_keeps_first_unit() {
    let table = UnitTable::from_pairs([("first", 1.0), ("second", 1.0)]).unwrap();
    assert_eq!(select_unit(42.0, &table).label(), "first");

    // 500 centi and 5 ones are both one exponent away from 1.
    let table = UnitTable::from_pairs([("centi", 0.01), ("ones", 1.0)]).unwrap();
    let scaled = select_unit(5.0, &table);
    assert_eq!(scaled.label(), "centi");
    assert_eq!(scaled.value, 500.0);

    let table = UnitTable::from_pairs([("ones", 1.0), ("centi", 0.01)]).unwrap();
    assert_eq!(select_unit(5.0, &table).label(), "ones");
}

#[test]
fn test_select_zero_picks_first_unit() {
    let table = bytes_table();
    let scaled = select_unit(0.0, &table);
    assert_eq!(scaled.label(), "bytes");
    assert_eq!(scaled.value, 0.0);

    let reversed =
        UnitTable::from_pairs([("MB", 1_000_000.0), ("kB", 1000.0), ("bytes", 1.0)]).unwrap();
    assert_eq!(select_unit(0.0, &reversed).label(), "MB");
}

#[test]
fn test_select_negative_uses_magnitude() {
    let table = bytes_table();
    let scaled = select_unit(-1500.0, &table);
    assert_eq!(scaled.label(), "kB");
    assert_eq!(scaled.value, -1.5);
}

#[test]
fn test_select_single_unit_is_trivial() {
    let table = UnitTable::single("MB");
    let scaled = select_unit(123_456.789, &table);
    assert_eq!(scaled.label(), "MB");
    assert_eq!(scaled.value, 123_456.79);
}

#[test]
fn test_select_custom_round_digits() {
    let table = bytes_table();
    assert_eq!(select_unit_rounded(1_234_567.0, &table, 0).value, 1.0);
    assert_eq!(select_unit_rounded(1_234_567.0, &table, 3).value, 1.235);
}

// ---------------------------------------------------------------
// UnitTable configuration
// ---------------------------------------------------------------

#[test]
fn test_table_deserializes_from_json() {
    let table: UnitTable =
        serde_json::from_str(r#"[{"label":"bytes","multiplier":1},{"label":"kB","multiplier":1000}]"#)
            .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(select_unit(2048.0, &table).label(), "kB");

    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(
        json,
        r#"[{"label":"bytes","multiplier":1.0},{"label":"kB","multiplier":1000.0}]"#
    );
}

#[test]
fn test_table_deserialize_rejects_empty() {
    let result: Result<UnitTable, _> = serde_json::from_str("[]");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("at least one unit"), "got: {}", err);
}

#[test]
fn test_table_new_rejects_negative_multiplier() {
    let err = UnitTable::new(vec![UnitSpec::new("neg", -1.0)]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMultiplier { .. }));
    assert_eq!(
        err.to_string(),
        "unit 'neg' has invalid multiplier -1 (must be finite and > 0)"
    );
}
