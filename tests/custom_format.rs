use numstr::{FormattingProfile, format_f64, format_i32, format_i64, profile};

#[test]
fn test_digit_placeholders() {
    let profile = FormattingProfile::default();
    assert_eq!(format_f64(1234567.891, "#,##0.00", &profile).unwrap(), "1,234,567.89");
    assert_eq!(format_i32(7, "000.00", &profile).unwrap(), "007.00");
    assert_eq!(format_f64(0.35, "#.##", &profile).unwrap(), ".35");
    assert_eq!(format_i32(0, "#", &profile).unwrap(), "");
    assert_eq!(format_i32(0, "0", &profile).unwrap(), "0");
}

#[test]
fn test_scaling_commas() {
    let profile = FormattingProfile::default();
    // A trailing comma run divides by 1000 per comma without grouping.
    assert_eq!(format_i32(100000000, "0,,", &profile).unwrap(), "100");
    // Grouping and scaling combine.
    assert_eq!(format_i64(1500000000, "#,##0,,", &profile).unwrap(), "1,500");
}

#[test]
fn test_percent_and_per_mille_scaling() {
    let profile = FormattingProfile::default();
    assert_eq!(format_f64(0.125, "0.0%", &profile).unwrap(), "12.5%");
    assert_eq!(format_f64(0.5, "0\u{2030}", &profile).unwrap(), "500\u{2030}");
}

#[test]
fn test_sections() {
    let profile = FormattingProfile::default();
    let pattern = "0.00;(0.00);zero";
    assert_eq!(format_f64(1.5, pattern, &profile).unwrap(), "1.50");
    assert_eq!(format_f64(-1.5, pattern, &profile).unwrap(), "(1.50)");
    assert_eq!(format_f64(0.0, pattern, &profile).unwrap(), "zero");
    // A negative that rounds to zero re-dispatches to the zero section.
    assert_eq!(format_f64(-0.001, pattern, &profile).unwrap(), "zero");
}

#[test]
fn test_negative_section_suppresses_sign() {
    let profile = FormattingProfile::default();
    assert_eq!(format_f64(-2.5, "0.0;0.0-", &profile).unwrap(), "2.5-");
    // With a single section the sign is emitted automatically.
    assert_eq!(format_f64(-1.5, "0.0", &profile).unwrap(), "-1.5");
    // An empty negative section falls back to the first section.
    assert_eq!(format_f64(-1.5, "0.0;", &profile).unwrap(), "-1.5");
}

#[test]
fn test_scientific_patterns() {
    let profile = FormattingProfile::default();
    assert_eq!(format_f64(12345.0, "0.0#E+00", &profile).unwrap(), "1.23E+04");
    // E-00 omits the sign on positive exponents.
    assert_eq!(format_f64(12345.0, "0.0#E-00", &profile).unwrap(), "1.23E04");
    assert_eq!(format_f64(0.00123, "0.00E+00", &profile).unwrap(), "1.23E-03");
}

#[test]
fn test_literals_and_quotes() {
    let profile = FormattingProfile::default();
    assert_eq!(format_f64(7.5, "0.0 'kg'", &profile).unwrap(), "7.5 kg");
    assert_eq!(format_i32(5, "0 \"abc", &profile).unwrap(), "5 abc");
    assert_eq!(format_i32(12, "\\#0", &profile).unwrap(), "#12");
}

#[test]
fn test_locale_separators_in_patterns() {
    let de = profile::builtin("de-DE").unwrap();
    assert_eq!(format_f64(1234567.891, "#,##0.00", &de).unwrap(), "1.234.567,89");
}

#[test]
fn test_unknown_leading_letter_is_custom() {
    let profile = FormattingProfile::default();
    // "Q#" is not a standard specifier; it renders as a picture pattern.
    assert_eq!(format_i32(42, "Q#", &profile).unwrap(), "Q42");
}
