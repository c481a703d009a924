use numstr::{FormattingProfile, format_f64, profile};

#[test]
fn test_en_us_currency_patterns() {
    let en_us = profile::builtin("en-US").unwrap();
    assert_eq!(format_f64(12345.6789, "C", &en_us).unwrap(), "$12,345.68");
    assert_eq!(format_f64(-12345.6789, "C", &en_us).unwrap(), "($12,345.68)");
    assert_eq!(format_f64(12345.6789, "C0", &en_us).unwrap(), "$12,346");
    assert_eq!(format_f64(-12345.6789, "C3", &en_us).unwrap(), "($12,345.679)");
    assert_eq!(format_f64(0.0, "C", &en_us).unwrap(), "$0.00");
}

#[test]
fn test_invariant_currency() {
    let invariant = FormattingProfile::default();
    assert_eq!(
        format_f64(12345.6789, "C", &invariant).unwrap(),
        "\u{a4}12,345.68"
    );
    assert_eq!(
        format_f64(-12345.6789, "C", &invariant).unwrap(),
        "(\u{a4}12,345.68)"
    );
}

#[test]
fn test_trailing_symbol_profiles() {
    let de = profile::builtin("de-DE").unwrap();
    assert_eq!(format_f64(12345.6789, "C", &de).unwrap(), "12.345,68 €");
    assert_eq!(format_f64(-12345.6789, "C", &de).unwrap(), "-12.345,68 €");

    let sv = profile::builtin("sv-SE").unwrap();
    assert_eq!(format_f64(1234.5, "C", &sv).unwrap(), "1 234,50 kr");
}

#[test]
fn test_variable_group_sizes() {
    let en_in = profile::builtin("en-IN").unwrap();
    assert_eq!(
        format_f64(123456789.0, "N0", &en_in).unwrap(),
        "12,34,56,789"
    );
    assert_eq!(
        format_f64(123456.789, "C", &en_in).unwrap(),
        "₹ 1,23,456.79"
    );
}

#[test]
fn test_group_size_zero_stops_grouping() {
    let mut profile = FormattingProfile::default();
    profile.group_sizes = vec![3, 0];
    assert_eq!(
        format_f64(123456789.0, "N0", &profile).unwrap(),
        "123456,789"
    );

    profile.group_sizes = vec![0];
    assert_eq!(format_f64(123456789.0, "N0", &profile).unwrap(), "123456789");
}

#[test]
fn test_number_negative_pattern_selection() {
    let mut profile = FormattingProfile::default();
    profile.number_negative_pattern = 0; // (#)
    assert_eq!(format_f64(-1234.5, "N1", &profile).unwrap(), "(1,234.5)");
    profile.number_negative_pattern = 4; // # -
    assert_eq!(format_f64(-1234.5, "N1", &profile).unwrap(), "1,234.5 -");
}
